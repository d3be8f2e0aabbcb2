use crate::book::AddressBook;
use crate::commands::helpers::find_record_mut;
use crate::commands::{recover, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Birthday;

/// Sets the contact's birthday, or clears it when `birthday` is `None`.
pub fn run(book: &mut AddressBook, name: &str, birthday: Option<&str>) -> Result<CmdResult> {
    apply(book, name, birthday).or_else(recover)
}

fn apply(book: &mut AddressBook, name: &str, birthday: Option<&str>) -> Result<CmdResult> {
    let birthday = Birthday::parse_optional(birthday)?;
    let record = find_record_mut(book, name)?;
    let message = match birthday {
        Some(birthday) => {
            record.set_birthday(birthday);
            tracing::debug!(name, %birthday, "birthday set");
            format!("Birthday set for {}: {}", name, birthday)
        }
        None => {
            record.clear_birthday();
            tracing::debug!(name, "birthday cleared");
            format!("Birthday cleared for {}", name)
        }
    };
    Ok(CmdResult::default()
        .with_affected_records(vec![record.clone()])
        .with_message(CmdMessage::success(message)))
}
