//! Watch ticket issuance
//!
//! A ticket records when the caller started watching. In verified credit mode
//! `/api/addPoints` only pays out against a ready, unused ticket.
//!
//! Each issue first sweeps expired tickets, and a user holding
//! `rewards.max_open_tickets` open tickets gets 409 until one is redeemed or
//! expires.

use crate::{ApiError, ApiResult, AppState, SessionUser, WatchTicketResponse};

use aw_core::{LedgerRecord, WatchTicket};
use aw_db::{LedgerRepository, WatchTicketRepository};

use std::panic::Location;

use axum::{Json, extract::State, http::StatusCode};
use chrono::{TimeDelta, Utc};
use error_location::ErrorLocation;

/// POST /api/v1/watch/start
pub async fn start_watch(
    State(state): State<AppState>,
    user: SessionUser,
) -> ApiResult<(StatusCode, Json<WatchTicketResponse>)> {
    let ledger = LedgerRepository::new(state.pool.clone());
    if ledger.find_by_uid(&user.uid).await?.is_none() {
        return Err(ApiError::NotFound {
            message: format!("No document: {}", LedgerRecord::path(&user.uid)),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let now = Utc::now();
    let tickets = WatchTicketRepository::new(state.pool.clone());
    match tickets.delete_expired(now).await {
        Ok(0) => {}
        Ok(removed) => log::debug!("Swept {} expired watch tickets", removed),
        Err(e) => log::warn!("Expired watch ticket sweep failed: {}", e),
    }

    let ticket = WatchTicket::issue(
        user.uid,
        state.rewards.points_per_view,
        seconds(state.rewards.watch_secs)?,
        seconds(state.rewards.ticket_ttl_secs)?,
        now,
    );

    tickets
        .create_capped(&ticket, state.rewards.max_open_tickets)
        .await?;

    state.metrics.ticket_issued();
    log::debug!("Issued watch ticket {} to {}", ticket.id, ticket.uid);

    Ok((StatusCode::CREATED, Json(ticket.into())))
}

fn seconds(secs: u64) -> ApiResult<TimeDelta> {
    i64::try_from(secs)
        .ok()
        .and_then(TimeDelta::try_seconds)
        .ok_or_else(|| ApiError::internal(format!("Duration out of range: {}s", secs)))
}
