//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every contactz operation, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! [`ContactzApi`] owns the two pieces of state a session has:
//! - the [`BookStore`] the book is persisted to
//! - the in-memory [`AddressBook`], which is the source of truth while the
//!   process runs
//!
//! The book is loaded once, when the API is opened. If loading fails the
//! session starts from an empty book and the failure is kept in
//! [`ContactzApi::load_error`] for the UI to report.
//!
//! Every command that changes the book is followed by a save. A failed save
//! doesn't undo the change or abort the session: it is appended to the
//! command's messages and the next successful save catches the file up.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O to the terminal**: No stdout, stderr or formatting
//!
//! ## Generic Over BookStore
//!
//! - Production: `ContactzApi<FileStore>`
//! - Testing: `ContactzApi<InMemoryStore>`

use crate::book::AddressBook;
use crate::commands;
use crate::config::ContactzConfig;
use crate::error::{ContactzError, Result};
use crate::store::BookStore;
use chrono::{Local, NaiveDate};
use std::num::NonZeroUsize;
use std::path::PathBuf;

pub struct ContactzApi<S: BookStore> {
    store: S,
    book: AddressBook,
    config_dir: PathBuf,
    load_error: Option<ContactzError>,
}

impl<S: BookStore> ContactzApi<S> {
    /// Loads the book from `store`. Config is read from `config_dir` on demand.
    pub fn open(store: S, config_dir: impl Into<PathBuf>) -> Self {
        let (book, load_error) = match store.load() {
            Ok(book) => (book, None),
            Err(e) => {
                tracing::warn!(error = %e, "could not load address book, starting empty");
                (AddressBook::new(), Some(e))
            }
        };
        Self {
            store,
            book,
            config_dir: config_dir.into(),
            load_error,
        }
    }

    pub fn load_error(&self) -> Option<&ContactzError> {
        self.load_error.as_ref()
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn add_contact(
        &mut self,
        name: &str,
        phones: &[String],
        birthday: Option<&str>,
    ) -> Result<CmdResult> {
        let result = commands::add::run(&mut self.book, name, phones, birthday)?;
        Ok(self.persist(result))
    }

    pub fn change_phone(&mut self, name: &str, old: &str, new: &str) -> Result<CmdResult> {
        let result = commands::change::run(&mut self.book, name, old, new)?;
        Ok(self.persist(result))
    }

    pub fn add_phone(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        let result = commands::phones::add(&mut self.book, name, phone)?;
        Ok(self.persist(result))
    }

    pub fn remove_phone(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        let result = commands::phones::remove(&mut self.book, name, phone)?;
        Ok(self.persist(result))
    }

    pub fn set_birthday(&mut self, name: &str, birthday: Option<&str>) -> Result<CmdResult> {
        let result = commands::birthday::run(&mut self.book, name, birthday)?;
        Ok(self.persist(result))
    }

    pub fn delete_contact(&mut self, name: &str) -> Result<CmdResult> {
        let result = commands::delete::run(&mut self.book, name)?;
        Ok(self.persist(result))
    }

    pub fn phones(&self, name: &str) -> Result<CmdResult> {
        commands::phone::run(&self.book, name)
    }

    pub fn search(&self, query: &str) -> Result<CmdResult> {
        commands::search::run(&self.book, query, today())
    }

    /// Lists contacts. `page_size` falls back to the configured size.
    pub fn show(&self, page: Option<usize>, page_size: Option<usize>) -> Result<CmdResult> {
        let page_size = match page_size {
            Some(size) => match NonZeroUsize::new(size) {
                Some(size) => size,
                None => {
                    return Ok(CmdResult::default().with_message(CmdMessage::error(
                        "Invalid input: page size must be greater than zero",
                    )))
                }
            },
            None => ContactzConfig::load(&self.config_dir)?.page_size(),
        };
        commands::show::run(&self.book, page_size, page, today())
    }

    pub fn config(&self, action: commands::config::ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    fn persist(&mut self, mut result: CmdResult) -> CmdResult {
        if !result.is_mutation() {
            return result;
        }
        if let Err(e) = self.store.save(&self.book) {
            tracing::error!(error = %e, "failed to save address book");
            result.add_message(CmdMessage::error(format!(
                "Failed to save address book: {}",
                e
            )));
        }
        result
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{
    BirthdayNote, CmdMessage, CmdResult, ContactPage, ContactView, MessageLevel,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::BookFixture;
    use crate::store::memory::InMemoryStore;

    fn api_with(store: InMemoryStore) -> (ContactzApi<InMemoryStore>, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let api = ContactzApi::open(store, dir.path());
        (api, dir)
    }

    fn phones(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn opens_with_stored_book() {
        let book = BookFixture::new()
            .with_contact("Alice", &["1234567890"])
            .build();
        let (api, _dir) = api_with(InMemoryStore::with_book(book.clone()));

        assert!(api.load_error().is_none());
        assert_eq!(api.book(), &book);
    }

    #[test]
    fn load_failure_starts_empty_and_is_reported() {
        let book = BookFixture::new().with_contact("Alice", &[]).build();
        let (api, _dir) = api_with(InMemoryStore::with_book(book).failing_loads());

        assert!(api.book().is_empty());
        assert!(matches!(
            api.load_error(),
            Some(ContactzError::Serialization(_))
        ));
    }

    #[test]
    fn mutations_are_saved() {
        let (mut api, _dir) = api_with(InMemoryStore::new());

        api.add_contact("Alice", &phones(&["1234567890"]), None).unwrap();
        api.change_phone("Alice", "1234567890", "0987654321").unwrap();
        api.set_birthday("Alice", Some("1990-06-15")).unwrap();

        assert_eq!(api.store().save_count(), 3);
        assert_eq!(api.store().saved(), api.book());
    }

    #[test]
    fn rejected_commands_and_queries_are_not_saved() {
        let (mut api, _dir) = api_with(InMemoryStore::new());

        api.add_contact("Alice", &phones(&["123"]), None).unwrap();
        api.delete_contact("Ghost").unwrap();
        api.search("A").unwrap();
        api.show(None, None).unwrap();

        assert_eq!(api.store().save_count(), 0);
    }

    #[test]
    fn save_failure_keeps_in_memory_state() {
        let (mut api, _dir) = api_with(InMemoryStore::new().failing_saves());

        let result = api.add_contact("Alice", &phones(&["1234567890"]), None).unwrap();

        assert!(result.has_errors());
        assert!(result
            .messages
            .iter()
            .any(|m| m.content.starts_with("Failed to save address book")));
        assert!(api.book().find("Alice").is_some());
    }

    #[test]
    fn show_uses_configured_page_size() {
        let book = BookFixture::new().with_contacts(5).build();
        let (api, _dir) = api_with(InMemoryStore::with_book(book));

        api.config(ConfigAction::Set("page-size".into(), "2".into()))
            .unwrap();
        let result = api.show(None, None).unwrap();
        assert_eq!(result.pages.len(), 3);

        let explicit = api.show(None, Some(5)).unwrap();
        assert_eq!(explicit.pages.len(), 1);

        let zero = api.show(None, Some(0)).unwrap();
        assert!(zero.has_errors());
    }

    #[test]
    fn delete_then_find_is_absent() {
        let book = BookFixture::new().with_contact("Alice", &[]).build();
        let (mut api, _dir) = api_with(InMemoryStore::with_book(book));

        api.delete_contact("Alice").unwrap();

        assert!(api.book().find("Alice").is_none());
        assert!(api.store().saved().find("Alice").is_none());
    }
}
