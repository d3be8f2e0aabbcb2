//! # Command Layer
//!
//! One module per user operation. Every command takes the address book (and
//! plain Rust values) and returns a [`CmdResult`]; none of them print, exit or
//! touch the disk, with the exception of `config` which reads and writes the
//! config file.
//!
//! Bad input is not a crash: validation failures and missing contacts come back
//! as messages inside an `Ok(CmdResult)` with the book left as it was. Only
//! failures the user can't fix by retyping (IO, corrupt config) are returned as
//! `Err`.

use crate::config::ContactzConfig;
use crate::error::{ContactzError, Result};
use crate::model::Record;
use chrono::NaiveDate;

pub mod add;
pub mod birthday;
pub mod change;
pub mod config;
pub mod delete;
pub mod helpers;
pub mod phone;
pub mod phones;
pub mod search;
pub mod show;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What a listing says about a contact's birthday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthdayNote {
    Today,
    InDays(i64),
}

/// A record as it should be shown on `today`.
#[derive(Debug, Clone)]
pub struct ContactView {
    pub record: Record,
    pub birthday_note: Option<BirthdayNote>,
}

impl ContactView {
    pub fn new(record: Record, today: NaiveDate) -> Self {
        let birthday_note = if record.is_birthday_today(today) {
            Some(BirthdayNote::Today)
        } else {
            record.days_to_birthday_from(today).map(BirthdayNote::InDays)
        };
        Self {
            record,
            birthday_note,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ContactPage {
    /// 1-based
    pub number: usize,
    pub total: usize,
    pub contacts: Vec<ContactView>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<Record>,
    pub listed_contacts: Vec<ContactView>,
    pub pages: Vec<ContactPage>,
    pub config: Option<ContactzConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_records(mut self, records: Vec<Record>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_contacts(mut self, contacts: Vec<ContactView>) -> Self {
        self.listed_contacts = contacts;
        self
    }

    pub fn with_pages(mut self, pages: Vec<ContactPage>) -> Self {
        self.pages = pages;
        self
    }

    pub fn with_config(mut self, config: ContactzConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|m| m.level == MessageLevel::Error)
    }

    /// True if the command changed the book and it should be saved.
    pub fn is_mutation(&self) -> bool {
        !self.affected_records.is_empty()
    }
}

/// Turns a user-correctable failure into a message; anything else propagates.
pub(crate) fn recover(err: ContactzError) -> Result<CmdResult> {
    match err {
        ContactzError::Validation(e) => {
            let message = CmdMessage::error(format!("Invalid input: {}", e));
            Ok(CmdResult::default().with_message(message))
        }
        ContactzError::NotFound(msg) => {
            Ok(CmdResult::default().with_message(CmdMessage::warning(msg)))
        }
        other => Err(other),
    }
}
