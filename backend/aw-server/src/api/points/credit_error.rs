//! Errors for `/api/addPoints`
//!
//! This endpoint keeps a flat `{"error": "<message>"}` body instead of the
//! structured body used by the `/api/v1` routes.

use crate::ApiError;

use aw_core::CoreError;
use aw_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct CreditErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum CreditError {
    /// Request failed validation (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// No usable session token (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Session or ticket does not allow this credit (403)
    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    /// The store refused the update (500)
    #[error("Store failure: {message} {location}")]
    Store {
        message: String,
        location: ErrorLocation,
    },
}

impl CreditError {
    #[track_caller]
    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn forbidden<S: Into<String>>(message: S) -> Self {
        Self::Forbidden {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Short label for the rejection metric
    pub fn reason(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => "bad_request",
            Self::Unauthorized { .. } => "unauthorized",
            Self::Forbidden { .. } => "forbidden",
            Self::Store { .. } => "store",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CreditError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let message = match self {
            Self::BadRequest { message, .. }
            | Self::Unauthorized { message, .. }
            | Self::Forbidden { message, .. }
            | Self::Store { message, .. } => message,
        };

        (status, Json(CreditErrorResponse { error: message })).into_response()
    }
}

impl From<CoreError> for CreditError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        Self::BadRequest {
            message: e.message(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<JsonRejection> for CreditError {
    #[track_caller]
    fn from(e: JsonRejection) -> Self {
        Self::BadRequest {
            message: format!("Invalid request body: {}", e.body_text()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Store failures surface with the store's own message
impl From<DbError> for CreditError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            DbError::TicketRejected { reason, .. } => Self::Forbidden {
                message: reason.to_string(),
                location,
            },
            other => Self::Store {
                message: other.store_message(),
                location,
            },
        }
    }
}

/// Session failures from the bearer check
impl From<ApiError> for CreditError {
    #[track_caller]
    fn from(e: ApiError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            ApiError::Unauthorized { message, .. } => Self::Unauthorized { message, location },
            ApiError::Forbidden { message, .. } => Self::Forbidden { message, location },
            ApiError::Internal { message, .. } => Self::Store { message, location },
            ApiError::NotFound { message, .. }
            | ApiError::Validation { message, .. }
            | ApiError::Conflict { message, .. }
            | ApiError::BadRequest { message, .. } => Self::BadRequest { message, location },
        }
    }
}
