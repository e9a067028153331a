use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid email address: {value} {location}")]
    InvalidEmail {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Message without the capture location, safe to hand to API callers
    pub fn message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::InvalidEmail { .. } => crate::models::email::BADLY_FORMATTED.to_string(),
        }
    }

    pub fn field(&self) -> Option<String> {
        match self {
            Self::Validation { field, .. } => field.clone(),
            Self::InvalidEmail { .. } => Some("email".to_string()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
