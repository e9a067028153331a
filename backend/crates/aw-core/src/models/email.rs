use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

pub(crate) const BADLY_FORMATTED: &str = "The email address is badly formatted.";

/// Normalized (trimmed, lowercased) email address.
///
/// Only the shape is checked: one `@`, a non-empty local part, a non-empty
/// domain and no whitespace. Deliverability is not this system's concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    #[track_caller]
    pub fn parse(raw: &str) -> CoreErrorResult<Self> {
        let normalized = raw.trim().to_lowercase();

        let valid = match normalized.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && !domain.is_empty()
                    && !domain.contains('@')
                    && !normalized.chars().any(char::is_whitespace)
            }
            None => false,
        };

        if !valid {
            return Err(CoreError::InvalidEmail {
                value: raw.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
