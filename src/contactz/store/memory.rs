use super::BookStore;
use crate::book::AddressBook;
use crate::error::{ContactzError, Result};
use std::io;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    saved: AddressBook,
    save_count: usize,
    fail_loads: bool,
    fail_saves: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_book(book: AddressBook) -> Self {
        Self {
            saved: book,
            ..Self::default()
        }
    }

    /// Every `load` fails with a decode error.
    pub fn failing_loads(mut self) -> Self {
        self.fail_loads = true;
        self
    }

    /// Every `save` fails with an IO error.
    pub fn failing_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    pub fn saved(&self) -> &AddressBook {
        &self.saved
    }

    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl BookStore for InMemoryStore {
    fn load(&self) -> Result<AddressBook> {
        if self.fail_loads {
            return Err(ContactzError::Serialization(serde::de::Error::custom(
                "in-memory store holds no readable book",
            )));
        }
        Ok(self.saved.clone())
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        if self.fail_saves {
            return Err(ContactzError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "in-memory store is read-only",
            )));
        }
        self.saved = book.clone();
        self.save_count += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::book::AddressBook;
    use crate::model::{Birthday, Name, Record};

    pub struct BookFixture {
        pub book: AddressBook,
    }

    impl Default for BookFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl BookFixture {
        pub fn new() -> Self {
            Self {
                book: AddressBook::new(),
            }
        }

        pub fn with_contacts(mut self, count: usize) -> Self {
            for i in 0..count {
                let name = Name::new(format!("Contact {:02}", i + 1)).unwrap();
                let mut record = Record::new(name);
                record.add_phone(&format!("{:010}", i + 1)).unwrap();
                self.book.add_record(record);
            }
            self
        }

        pub fn with_contact(mut self, name: &str, phones: &[&str]) -> Self {
            let mut record = Record::new(Name::new(name).unwrap());
            for phone in phones {
                record.add_phone(phone).unwrap();
            }
            self.book.add_record(record);
            self
        }

        pub fn with_birthday_contact(
            mut self,
            name: &str,
            phones: &[&str],
            birthday: &str,
        ) -> Self {
            let mut record = Record::new(Name::new(name).unwrap())
                .with_birthday(Birthday::parse(birthday).unwrap());
            for phone in phones {
                record.add_phone(phone).unwrap();
            }
            self.book.add_record(record);
            self
        }

        pub fn build(self) -> AddressBook {
            self.book
        }
    }
}
