use crate::book::AddressBook;
use crate::commands::{recover, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Birthday, Name, Record};

/// Creates a contact from `name`, `phones` and an optional birthday.
///
/// Everything is validated before the book is touched: one bad phone rejects
/// the whole contact. An existing contact with the same name is replaced.
pub fn run(
    book: &mut AddressBook,
    name: &str,
    phones: &[String],
    birthday: Option<&str>,
) -> Result<CmdResult> {
    build(name, phones, birthday)
        .map(|record| insert(book, record))
        .or_else(recover)
}

fn build(name: &str, phones: &[String], birthday: Option<&str>) -> Result<Record> {
    let mut record = Record::new(Name::new(name)?);
    for phone in phones {
        record.add_phone(phone)?;
    }
    if let Some(birthday) = Birthday::parse_optional(birthday)? {
        record.set_birthday(birthday);
    }
    Ok(record)
}

fn insert(book: &mut AddressBook, record: Record) -> CmdResult {
    let name = record.name().to_string();
    let mut result = CmdResult::default().with_affected_records(vec![record.clone()]);
    if book.add_record(record).is_some() {
        tracing::debug!(%name, "replaced existing contact");
        result.add_message(CmdMessage::info(format!(
            "Replaced existing contact {}",
            name
        )));
    }
    result.add_message(CmdMessage::success(format!("Contact added: {}", name)));
    result
}
