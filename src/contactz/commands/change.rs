use crate::book::AddressBook;
use crate::commands::helpers::find_record_mut;
use crate::commands::{recover, CmdMessage, CmdResult};
use crate::error::Result;

/// Replaces `old` with `new` on the named contact.
pub fn run(book: &mut AddressBook, name: &str, old: &str, new: &str) -> Result<CmdResult> {
    apply(book, name, old, new).or_else(recover)
}

fn apply(book: &mut AddressBook, name: &str, old: &str, new: &str) -> Result<CmdResult> {
    let record = find_record_mut(book, name)?;
    record.edit_phone(old, new)?;
    tracing::debug!(name, old, new, "phone updated");
    Ok(CmdResult::default()
        .with_affected_records(vec![record.clone()])
        .with_message(CmdMessage::success(format!(
            "Phone number updated for {}: {} -> {}",
            name, old, new
        ))))
}
