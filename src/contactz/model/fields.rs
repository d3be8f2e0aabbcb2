//! Validated field values.
//!
//! Every field is an immutable newtype that can only be obtained through a
//! validating constructor, so a value held by a [`Record`](super::Record) always
//! satisfies its own rule. "Changing" a field means building a new one and
//! swapping it in; a failed validation never touches the previous value.
//!
//! Fields serialize as plain strings and re-validate on the way back in, so a
//! hand-edited data file can't smuggle in an invalid phone or date.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const PHONE_DIGITS: usize = 10;
pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name cannot be empty")]
    EmptyName,

    #[error("phone must be 10 digits")]
    InvalidPhone { value: String },

    #[error("invalid date format")]
    InvalidDate { value: String },
}

/// A contact's name. Any non-empty text is accepted.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A phone number: exactly ten ASCII digits, no formatting characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if !Self::is_valid(&value) {
            return Err(ValidationError::InvalidPhone { value });
        }
        Ok(Self(value))
    }

    fn is_valid(value: &str) -> bool {
        value.len() == PHONE_DIGITS && value.bytes().all(|b| b.is_ascii_digit())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A birthday, parsed from `YYYY-MM-DD`.
///
/// A contact without a birthday holds `None`; see [`Birthday::parse_optional`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate {
                value: value.to_string(),
            })
    }

    pub fn parse_optional(value: Option<&str>) -> Result<Option<Self>, ValidationError> {
        value.map(Self::parse).transpose()
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The date this birthday falls on in `year`.
    ///
    /// February 29 is observed on February 28 in non-leap years.
    pub fn in_year(&self, year: i32) -> NaiveDate {
        let (month, day) = (self.0.month(), self.0.day());
        NaiveDate::from_ymd_opt(year, month, day)
            .or_else(|| NaiveDate::from_ymd_opt(year, month, day - 1))
            .unwrap_or(self.0)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

impl TryFrom<String> for Name {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Name::new(value)
    }
}

impl TryFrom<String> for Phone {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Phone::new(value)
    }
}

impl TryFrom<String> for Birthday {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Birthday::parse(&value)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

impl From<Birthday> for String {
    fn from(birthday: Birthday) -> Self {
        birthday.to_string()
    }
}
