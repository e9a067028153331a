use chrono::{DateTime, Utc};
use thiserror::Error;

/// Reasons a watch ticket cannot be redeemed for a credit
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TicketRejection {
    #[error("Ticket already used")]
    AlreadyConsumed,

    #[error("Ticket does not belong to this user")]
    WrongOwner,

    #[error("Ticket is worth {expected} points, request asked for {actual}")]
    PointsMismatch { expected: i64, actual: i64 },

    #[error("Ad not finished, ticket is redeemable from {ready_at}")]
    NotReady { ready_at: DateTime<Utc> },

    #[error("Ticket expired")]
    Expired,

    #[error("Unknown ticket")]
    Unknown,
}

impl TicketRejection {
    pub fn code(&self) -> &'static str {
        match self {
            Self::AlreadyConsumed => "consumed",
            Self::WrongOwner => "wrong_owner",
            Self::PointsMismatch { .. } => "points_mismatch",
            Self::NotReady { .. } => "not_ready",
            Self::Expired => "expired",
            Self::Unknown => "unknown",
        }
    }
}
