use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failures talking to the rewards server
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request never produced a response (connection refused, timeout, ...)
    #[error("Transport error: {source} {location}")]
    Transport {
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },

    /// The server answered with a non-2xx status
    #[error("Server rejected request ({status} {code}): {message} {location}")]
    Api {
        status: u16,
        code: String,
        message: String,
        location: ErrorLocation,
    },

    /// A 2xx body that does not match the expected shape
    #[error("Unexpected response body: {source} {location}")]
    Decode {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl ClientError {
    #[track_caller]
    pub fn api_error(status: u16, code: String, message: String) -> Self {
        ClientError::Api {
            status,
            code,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The text shown to a user after "Error: "
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport { source, .. } => source.to_string(),
            Self::Api { message, .. } => message.clone(),
            Self::Decode { source, .. } => format!("Unexpected response: {source}"),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Transport { source, .. } => source.status().map(|s| s.as_u16()),
            Self::Decode { .. } => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        ClientError::Transport {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        ClientError::Decode {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
