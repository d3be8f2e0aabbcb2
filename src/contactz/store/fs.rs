use super::BookStore;
use crate::book::AddressBook;
use crate::error::Result;
use std::fs;
use std::path::PathBuf;

pub const BOOK_FILENAME: &str = "address_book.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn book_path(&self) -> PathBuf {
        self.root.join(BOOK_FILENAME)
    }

    /// Where a copy of an unreadable book is kept before it can be overwritten.
    pub fn backup_path(&self) -> PathBuf {
        self.book_path().with_extension("json.bak")
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }
        Ok(())
    }
}

impl BookStore for FileStore {
    fn load(&self) -> Result<AddressBook> {
        let path = self.book_path();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no address book on disk yet");
            return Ok(AddressBook::new());
        }
        let content = fs::read_to_string(&path)?;
        let book: AddressBook = match serde_json::from_str(&content) {
            Ok(book) => book,
            Err(e) => {
                let backup = self.backup_path();
                match fs::write(&backup, &content) {
                    Ok(()) => {
                        tracing::warn!(path = %backup.display(), "copied unreadable address book")
                    }
                    Err(io) => {
                        tracing::warn!(error = %io, "could not back up unreadable address book")
                    }
                }
                return Err(e.into());
            }
        };
        tracing::debug!(path = %path.display(), records = book.len(), "loaded address book");
        Ok(book)
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.ensure_dir()?;
        let path = self.book_path();
        let content = serde_json::to_string_pretty(book)?;

        // Written beside the book, then renamed over it
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, content)?;
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }

        tracing::debug!(path = %path.display(), records = book.len(), "saved address book");
        Ok(())
    }
}
