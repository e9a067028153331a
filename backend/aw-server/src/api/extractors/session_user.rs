//! Bearer session authentication for REST handlers

use crate::{ApiError, AppState};

use aw_auth::{JwtValidator, bearer_token};

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header::AUTHORIZATION, request::Parts},
};

/// The user a request's `Authorization: Bearer <token>` header belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub uid: String,
    pub email: String,
}

impl FromRequestParts<AppState> for SessionUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move { authenticate(&parts.headers, &state.jwt_validator) }
    }
}

/// Validate the bearer token in `headers` and return its subject.
#[track_caller]
pub fn authenticate(
    headers: &HeaderMap,
    validator: &JwtValidator,
) -> Result<SessionUser, ApiError> {
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let token = bearer_token(header)?;
    let claims = validator.validate(token)?;

    log::debug!("Authenticated session for {}", claims.sub);

    Ok(SessionUser {
        uid: claims.sub,
        email: claims.email,
    })
}
