use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult, ContactView};
use crate::error::Result;
use chrono::NaiveDate;

/// Contacts whose name or phone contains `query`, in book order.
pub fn run(book: &AddressBook, query: &str, today: NaiveDate) -> Result<CmdResult> {
    let listed: Vec<_> = book
        .search(query)
        .into_iter()
        .map(|record| ContactView::new(record.clone(), today))
        .collect();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info(format!("No contacts match '{}'", query)));
    }
    Ok(result.with_listed_contacts(listed))
}
