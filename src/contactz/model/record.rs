use super::fields::{Birthday, Name, Phone};
use crate::error::{ContactzError, Result};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// One contact: a name, its phone numbers and an optional birthday.
///
/// The name is fixed at construction because it is the key the record is
/// stored under in an [`AddressBook`](crate::book::AddressBook).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn with_birthday(mut self, birthday: Birthday) -> Self {
        self.birthday = Some(birthday);
        self
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    pub fn first_phone(&self) -> Option<&Phone> {
        self.phones.first()
    }

    /// Validates `raw` and appends it. Duplicates are kept.
    pub fn add_phone(&mut self, raw: &str) -> Result<()> {
        self.phones.push(Phone::new(raw)?);
        Ok(())
    }

    /// Removes every phone equal to `value`, returning how many were dropped.
    pub fn remove_phone(&mut self, value: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != value);
        before - self.phones.len()
    }

    /// Replaces the first phone equal to `old` with `new`.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
        let slot = self
            .phones
            .iter()
            .position(|p| p.as_str() == old)
            .ok_or_else(|| ContactzError::phone_not_found(self.name.as_str(), old))?;
        self.phones[slot] = Phone::new(new)?;
        Ok(())
    }

    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == value)
    }

    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    pub fn clear_birthday(&mut self) {
        self.birthday = None;
    }

    /// Days until the next birthday, counted from the local calendar date.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next birthday.
    ///
    /// Only a strictly future date in the current year counts; a birthday that
    /// falls on `today` rolls over to next year, so the result is never zero.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        let birthday = self.birthday?;
        let this_year = birthday.in_year(today.year());
        let days = (this_year - today).num_days();
        if days > 0 {
            return Some(days);
        }
        let next_year = birthday.in_year(today.year() + 1);
        Some((next_year - today).num_days())
    }

    pub fn is_birthday_today(&self, today: NaiveDate) -> bool {
        self.birthday.is_some_and(|b| b.in_year(today.year()) == today)
    }

    /// True when the name or any phone contains `query`. Case-sensitive.
    pub fn matches(&self, query: &str) -> bool {
        self.name.as_str().contains(query)
            || self.phones.iter().any(|p| p.as_str().contains(query))
    }
}
