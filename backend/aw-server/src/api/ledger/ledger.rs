//! Ledger REST API handlers

use crate::{ApiError, ApiResult, AppState, LedgerResponse, SessionUser};

use aw_core::LedgerRecord;
use aw_db::LedgerRepository;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
};
use error_location::ErrorLocation;

/// GET /api/v1/ledger/{uid}
///
/// Read the caller's own ledger record
pub async fn get_ledger(
    State(state): State<AppState>,
    user: SessionUser,
    Path(uid): Path<String>,
) -> ApiResult<Json<LedgerResponse>> {
    if user.uid != uid {
        return Err(ApiError::forbidden("Cannot read another user's ledger"));
    }

    let repo = LedgerRepository::new(state.pool.clone());
    let record = repo
        .find_by_uid(&uid)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("No document: {}", LedgerRecord::path(&uid)),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(LedgerResponse {
        ledger: record.into(),
    }))
}
