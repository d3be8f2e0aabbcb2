use crate::book::AddressBook;
use crate::error::{ContactzError, Result};
use crate::model::{Phone, Record};

pub fn find_record_mut<'a>(book: &'a mut AddressBook, name: &str) -> Result<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| ContactzError::contact_not_found(name))
}

pub fn join_phones(record: &Record) -> String {
    record
        .phones()
        .iter()
        .map(Phone::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
