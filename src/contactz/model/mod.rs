//! Core data types: validated fields and the contact [`Record`].

mod fields;
mod record;

pub use fields::{Birthday, Name, Phone, ValidationError, BIRTHDAY_FORMAT, PHONE_DIGITS};
pub use record::Record;
