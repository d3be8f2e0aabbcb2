//! # Address Book
//!
//! The keyed collection of every [`Record`]. Records are stored under their own
//! name, so looking one up, overwriting it or deleting it is a map operation.
//!
//! Iteration follows ascending name order. Pagination and search both work off
//! that order, which keeps page contents predictable from one call to the next.
//!
//! ## Pagination
//!
//! [`AddressBook::pages`] takes a snapshot of the current records and hands out
//! owned batches. It is not a live cursor: editing the book while holding a
//! [`Pages`] iterator leaves the batches unchanged, and calling `pages` again
//! starts over from the book's current contents.

use crate::error::{ContactzError, Result};
use crate::model::Record;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::num::NonZeroUsize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Record>", into = "Vec<Record>")]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `record` under its name, returning whatever was stored there
    /// before. The newest record always wins.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        self.records.insert(record.name().as_str().to_string(), record)
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    pub fn delete(&mut self, name: &str) -> Result<Record> {
        self.records
            .remove(name)
            .ok_or_else(|| ContactzError::contact_not_found(name))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn pages(&self, page_size: NonZeroUsize) -> Pages {
        let snapshot: Vec<Record> = self.records.values().cloned().collect();
        Pages {
            remaining: snapshot.into_iter(),
            page_size: page_size.get(),
        }
    }

    pub fn page_count(&self, page_size: NonZeroUsize) -> usize {
        self.records.len().div_ceil(page_size.get())
    }

    /// Records whose name, or one of whose phones, contains `query`.
    pub fn search(&self, query: &str) -> Vec<&Record> {
        self.records.values().filter(|r| r.matches(query)).collect()
    }
}

impl From<Vec<Record>> for AddressBook {
    fn from(records: Vec<Record>) -> Self {
        let mut book = AddressBook::new();
        for record in records {
            book.add_record(record);
        }
        book
    }
}

impl From<AddressBook> for Vec<Record> {
    fn from(book: AddressBook) -> Self {
        book.records.into_values().collect()
    }
}

/// Owned batches over a snapshot of an [`AddressBook`].
#[derive(Debug)]
pub struct Pages {
    remaining: std::vec::IntoIter<Record>,
    page_size: usize,
}

impl Iterator for Pages {
    type Item = Vec<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let page: Vec<Record> = self.remaining.by_ref().take(self.page_size).collect();
        if page.is_empty() {
            None
        } else {
            Some(page)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Birthday, Name};

    fn record(name: &str, phones: &[&str]) -> Record {
        let mut record = Record::new(Name::new(name).unwrap());
        for phone in phones {
            record.add_phone(phone).unwrap();
        }
        record
    }

    fn book_of(count: usize) -> AddressBook {
        let mut book = AddressBook::new();
        for i in 0..count {
            book.add_record(record(&format!("Contact {:02}", i), &[]));
        }
        book
    }

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn add_then_find_returns_equal_record() {
        let mut book = AddressBook::new();
        let alice = record("Alice", &["1234567890"]);
        book.add_record(alice.clone());

        assert_eq!(book.find("Alice"), Some(&alice));
        assert_eq!(book.find("Alice"), Some(&alice));
        assert_eq!(book.find("Bob"), None);
    }

    #[test]
    fn add_overwrites_same_name() {
        let mut book = AddressBook::new();
        let first = record("Alice", &["1234567890"]);
        let second = record("Alice", &["0987654321"]);

        assert_eq!(book.add_record(first.clone()), None);
        assert_eq!(book.add_record(second.clone()), Some(first));
        assert_eq!(book.len(), 1);
        assert_eq!(book.find("Alice"), Some(&second));
    }

    #[test]
    fn delete_then_find_is_absent() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", &[]));

        let removed = book.delete("Alice").unwrap();
        assert_eq!(removed.name().as_str(), "Alice");
        assert!(book.find("Alice").is_none());
    }

    #[test]
    fn delete_missing_is_not_found() {
        let mut book = AddressBook::new();
        let err = book.delete("Ghost").unwrap_err();
        assert!(matches!(err, ContactzError::NotFound(_)));
        assert_eq!(err.to_string(), "Record with name 'Ghost' not found.");
    }

    #[test]
    fn pages_cover_every_record_in_order() {
        for (count, page_size) in [(0, 3), (1, 3), (9, 3), (10, 3), (10, 1), (4, 10)] {
            let book = book_of(count);
            let pages: Vec<_> = book.pages(size(page_size)).collect();

            assert_eq!(pages.len(), count.div_ceil(page_size));
            assert_eq!(pages.len(), book.page_count(size(page_size)));
            if let Some((last, full)) = pages.split_last() {
                assert!(full.iter().all(|p| p.len() == page_size));
                assert!(!last.is_empty() && last.len() <= page_size);
            }

            let flattened: Vec<_> = pages.into_iter().flatten().collect();
            let expected: Vec<_> = book.iter().cloned().collect();
            assert_eq!(flattened, expected);
        }
    }

    #[test]
    fn pages_are_a_snapshot() {
        let mut book = book_of(4);
        let mut pages = book.pages(size(2));
        let first = pages.next().unwrap();

        book.delete("Contact 02").unwrap();
        book.add_record(record("Zed", &[]));

        assert_eq!(first.len(), 2);
        assert_eq!(pages.next().unwrap()[0].name().as_str(), "Contact 02");
        assert!(pages.next().is_none());

        // a fresh call sees the edits
        let names: Vec<_> = book
            .pages(size(10))
            .flatten()
            .map(|r| r.name().to_string())
            .collect();
        assert_eq!(names, ["Contact 00", "Contact 01", "Contact 03", "Zed"]);
    }

    #[test]
    fn search_matches_names_and_phones() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", &["5551234567"]));
        book.add_record(record("Bob", &["1112223333"]));

        let by_phone: Vec<_> = book
            .search("555")
            .into_iter()
            .map(|r| r.name().as_str())
            .collect();
        assert_eq!(by_phone, ["Alice"]);

        let by_name: Vec<_> = book
            .search("Bo")
            .into_iter()
            .map(|r| r.name().as_str())
            .collect();
        assert_eq!(by_name, ["Bob"]);

        assert!(book.search("zzz").is_empty());
        assert!(book.search("bob").is_empty());
        assert_eq!(book.search("").len(), 2);
    }

    #[test]
    fn serializes_as_record_list() {
        let mut book = AddressBook::new();
        book.add_record(
            record("Alice", &["1234567890"]).with_birthday(Birthday::parse("2024-06-15").unwrap()),
        );
        book.add_record(record("Bob", &[]));

        let json = serde_json::to_string(&book).unwrap();
        assert!(json.starts_with('['));

        let restored: AddressBook = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, book);
        assert_eq!(restored.names().collect::<Vec<_>>(), ["Alice", "Bob"]);
    }

    #[test]
    fn rejects_invalid_stored_phone() {
        let json = r#"[{"name":"Alice","phones":["12"],"birthday":null}]"#;
        assert!(serde_json::from_str::<AddressBook>(json).is_err());
    }
}
