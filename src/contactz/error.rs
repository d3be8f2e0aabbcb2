use crate::model::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContactzError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl ContactzError {
    pub fn contact_not_found(name: &str) -> Self {
        ContactzError::NotFound(format!("Record with name '{}' not found.", name))
    }

    pub fn phone_not_found(name: &str, phone: &str) -> Self {
        ContactzError::NotFound(format!(
            "Phone number {} not found for contact {}",
            phone, name
        ))
    }
}

pub type Result<T> = std::result::Result<T, ContactzError>;
