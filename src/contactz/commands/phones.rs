use crate::book::AddressBook;
use crate::commands::helpers::find_record_mut;
use crate::commands::{recover, CmdMessage, CmdResult};
use crate::error::Result;

/// Appends `phone` to an existing contact.
pub fn add(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    try_add(book, name, phone).or_else(recover)
}

fn try_add(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let record = find_record_mut(book, name)?;
    record.add_phone(phone)?;
    tracing::debug!(name, phone, "phone added");
    Ok(CmdResult::default()
        .with_affected_records(vec![record.clone()])
        .with_message(CmdMessage::success(format!(
            "Phone {} added to {}",
            phone, name
        ))))
}

/// Removes every copy of `phone` from a contact. Removing nothing is not an error.
pub fn remove(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    try_remove(book, name, phone).or_else(recover)
}

fn try_remove(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let record = find_record_mut(book, name)?;
    let removed = record.remove_phone(phone);
    tracing::debug!(name, phone, removed, "phone removed");
    if removed == 0 {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
            "{} has no phone {}",
            name, phone
        ))));
    }
    Ok(CmdResult::default()
        .with_affected_records(vec![record.clone()])
        .with_message(CmdMessage::success(format!(
            "Removed {} from {} ({} entr{})",
            phone,
            name,
            removed,
            if removed == 1 { "y" } else { "ies" }
        ))))
}
