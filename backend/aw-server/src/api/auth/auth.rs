//! Identity REST API handlers
//!
//! Sign-up creates the identity and its ledger record in one transaction.
//! Both handlers answer with a fresh session token.

use crate::{ApiError, ApiKeyGuard, ApiResult, AppState, CredentialsRequest, SessionResponse};

use aw_auth::{hash_password, validate_password, verify_password};
use aw_core::{Email, Identity};
use aw_db::{DbError, IdentityRepository};

use std::panic::Location;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use error_location::ErrorLocation;

pub const EMAIL_IN_USE: &str = "The email address is already in use by another account.";
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/v1/auth/signup
///
/// Register a new account and open its ledger with zero points
pub async fn sign_up(
    State(state): State<AppState>,
    _api_key: ApiKeyGuard,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<SessionResponse>)> {
    let Json(request) = payload?;

    let email = Email::parse(&request.email)?;
    validate_password(&request.password)?;

    let password_hash = run_blocking(move || hash_password(&request.password)).await??;
    let identity = Identity::new(email, password_hash);

    let repo = IdentityRepository::new(state.pool.clone());
    repo.register(&identity).await.map_err(|e| match e {
        DbError::Conflict { .. } => ApiError::Conflict {
            message: EMAIL_IN_USE.to_string(),
            location: ErrorLocation::from(Location::caller()),
        },
        other => ApiError::from(other),
    })?;

    let issued = state.jwt_issuer.issue(&identity.uid, &identity.email)?;
    state.metrics.sign_up();
    log::info!("Registered account {}", identity.uid);

    Ok((
        StatusCode::CREATED,
        Json(SessionResponse::new(identity.uid, identity.email, issued)),
    ))
}

/// POST /api/v1/auth/login
///
/// Exchange email and password for a session token
pub async fn sign_in(
    State(state): State<AppState>,
    _api_key: ApiKeyGuard,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> ApiResult<Json<SessionResponse>> {
    let Json(request) = payload?;

    let email = Email::parse(&request.email)?;

    let repo = IdentityRepository::new(state.pool.clone());
    let Some(identity) = repo.find_by_email(email.as_str()).await? else {
        state.metrics.sign_in(false);
        return Err(ApiError::unauthorized(INVALID_CREDENTIALS));
    };

    let stored_hash = identity.password_hash.clone();
    let verified = run_blocking(move || verify_password(&request.password, &stored_hash)).await??;
    if !verified {
        state.metrics.sign_in(false);
        return Err(ApiError::unauthorized(INVALID_CREDENTIALS));
    }

    let issued = state.jwt_issuer.issue(&identity.uid, &identity.email)?;
    state.metrics.sign_in(true);

    Ok(Json(SessionResponse::new(
        identity.uid,
        identity.email,
        issued,
    )))
}

/// Argon2 is CPU bound; keep it off the async workers.
async fn run_blocking<T, F>(work: F) -> ApiResult<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| ApiError::internal(format!("Password worker failed: {}", e)))
}
