use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Shows the phone numbers of one contact, first number first.
pub fn run(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let Some(record) = book.find(name).filter(|r| r.first_phone().is_some()) else {
        return Ok(CmdResult::default().with_message(CmdMessage::warning("Phone number not found")));
    };

    let mut result = CmdResult::default();
    for phone in record.phones() {
        result.add_message(CmdMessage::info(phone.as_str()));
    }
    Ok(result)
}
