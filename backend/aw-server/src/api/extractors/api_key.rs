//! Project API key check for the identity endpoints

use crate::{ApiError, AppState};

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Passes when no project API key is configured or the request carries it.
pub struct ApiKeyGuard;

impl FromRequestParts<AppState> for ApiKeyGuard {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Some(expected) = state.api_key.as_deref() else {
                return Ok(ApiKeyGuard);
            };

            match parts
                .headers
                .get(API_KEY_HEADER)
                .and_then(|value| value.to_str().ok())
            {
                Some(provided) if provided == expected => Ok(ApiKeyGuard),
                Some(_) => Err(ApiError::unauthorized("Invalid API key")),
                None => Err(ApiError::unauthorized("Missing API key")),
            }
        }
    }
}
