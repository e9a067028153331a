//! Points ledger endpoint
//!
//! `POST /api/addPoints` applies a positive delta to `users/<uid>.points` with
//! a single atomic increment. In verified credit mode the caller must also own
//! the session and present a redeemable watch ticket; ticket consumption and
//! the increment commit together.

use crate::{AddPointsRequest, AppState, CreditError, CreditResponse, authenticate};

use aw_config::CreditMode;
use aw_core::CreditCommand;
use aw_db::{LedgerRepository, WatchTicketRepository};

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::HeaderMap,
};
use chrono::Utc;
use uuid::Uuid;

pub const MISSING_TICKET: &str = "Missing watch ticket";
pub const INVALID_TICKET: &str = "Invalid watch ticket";

/// POST /api/addPoints
pub async fn add_points(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<AddPointsRequest>, JsonRejection>,
) -> Result<Json<CreditResponse>, CreditError> {
    let outcome = credit(&state, &headers, payload).await;

    match &outcome {
        Ok(points) => state.metrics.credit_applied(*points),
        Err(e) => state.metrics.credit_rejected(e.reason()),
    }

    outcome.map(|_| Json(CreditResponse { success: true }))
}

async fn credit(
    state: &AppState,
    headers: &HeaderMap,
    payload: Result<Json<AddPointsRequest>, JsonRejection>,
) -> Result<i64, CreditError> {
    let Json(request) = payload?;
    let command = CreditCommand::from_parts(request.uid, request.points)?;

    match state.rewards.credit_mode {
        CreditMode::Open => {
            LedgerRepository::new(state.pool.clone())
                .increment_points(&command.uid, command.delta)
                .await?;
        }
        CreditMode::Verified => {
            let user = authenticate(headers, &state.jwt_validator)?;
            if user.uid != command.uid {
                return Err(CreditError::forbidden(
                    "Session does not match the credited user",
                ));
            }

            let ticket = request
                .ticket
                .filter(|t| !t.is_empty())
                .ok_or_else(|| CreditError::bad_request(MISSING_TICKET))?;
            let ticket_id =
                Uuid::parse_str(&ticket).map_err(|_| CreditError::bad_request(INVALID_TICKET))?;

            WatchTicketRepository::new(state.pool.clone())
                .redeem(ticket_id, &command.uid, command.delta, Utc::now())
                .await?;
        }
    }

    log::info!("Credited {} points to {}", command.delta, command.uid);
    Ok(command.delta.get())
}
