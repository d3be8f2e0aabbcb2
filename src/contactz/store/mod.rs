//! # Storage Layer
//!
//! This module defines the storage abstraction for contactz. The [`BookStore`]
//! trait lets the application load and save the address book without knowing
//! where it lives.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - The whole book is one JSON array in `address_book.json`
//!   - A missing file is an empty book
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - Keeps the last saved book
//!   - Can be told to fail, to exercise error reporting
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── address_book.json   # Every record (JSON array)
//! └── config.json         # ContactzConfig
//! ```
//!
//! The store only moves whole books. The in-memory [`AddressBook`] held by the
//! API is the source of truth between saves.

use crate::book::AddressBook;
use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for address book persistence.
pub trait BookStore {
    /// Read the persisted book. Nothing persisted yet is an empty book, not an error.
    fn load(&self) -> Result<AddressBook>;

    /// Replace the persisted book with `book`.
    fn save(&mut self, book: &AddressBook) -> Result<()>;
}
