use aw_core::TicketRejection;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("No document to update: {path} {location}")]
    RecordNotFound {
        path: String,
        location: ErrorLocation,
    },

    #[error("Points overflow on {path} {location}")]
    Overflow {
        path: String,
        location: ErrorLocation,
    },

    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    #[error("Ticket rejected: {reason} {location}")]
    TicketRejected {
        reason: TicketRejection,
        location: ErrorLocation,
    },
}

impl DbError {
    /// The store's own description of the failure, without capture location.
    pub fn store_message(&self) -> String {
        match self {
            Self::Sqlx { source, .. } => source.to_string(),
            Self::Migration { message, .. }
            | Self::Initialization { message, .. }
            | Self::Conflict { message, .. } => message.clone(),
            Self::RecordNotFound { path, .. } => format!("No document to update: {}", path),
            Self::Overflow { path, .. } => format!("Points overflow on {}", path),
            Self::TicketRejected { reason, .. } => reason.to_string(),
        }
    }

    #[track_caller]
    pub(crate) fn initialization<S: Into<String>>(message: S) -> Self {
        Self::Initialization {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn ticket_rejected(reason: TicketRejection) -> Self {
        Self::TicketRejected {
            reason,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
