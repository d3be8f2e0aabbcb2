use crate::book::AddressBook;
use crate::commands::{recover, CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(book: &mut AddressBook, name: &str) -> Result<CmdResult> {
    match book.delete(name) {
        Ok(record) => Ok(CmdResult::default()
            .with_message(CmdMessage::success(format!("Contact deleted: {}", name)))
            .with_affected_records(vec![record])),
        Err(err) => {
            tracing::warn!(name, "delete of unknown contact");
            recover(err)
        }
    }
}
