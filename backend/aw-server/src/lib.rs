pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod metrics;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{EMAIL_IN_USE, INVALID_CREDENTIALS, sign_in, sign_up},
        credentials_request::CredentialsRequest,
        session_response::SessionResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::{
        api_key::{API_KEY_HEADER, ApiKeyGuard},
        session_user::{SessionUser, authenticate},
    },
    ledger::{ledger::get_ledger, ledger_dto::LedgerDto, ledger_response::LedgerResponse},
    points::{
        add_points_request::AddPointsRequest,
        credit_error::{CreditError, CreditErrorResponse},
        credit_response::CreditResponse,
        points::{INVALID_TICKET, MISSING_TICKET, add_points},
    },
    rewards::{rewards::get_rewards, rewards_response::RewardsResponse},
    watch::{watch::start_watch, watch_ticket_response::WatchTicketResponse},
};
pub use app_state::AppState;
pub use error::{Result as ServerResult, ServerError};
pub use crate::metrics::Metrics;

pub use crate::routes::build_router;
