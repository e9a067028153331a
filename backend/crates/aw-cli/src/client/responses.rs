use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of a successful sign-up or sign-in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub uid: String,
    pub email: String,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Body of a successful `/api/addPoints` call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditAck {
    #[serde(default)]
    pub success: bool,
}

/// A watch ticket handed out by `/api/v1/watch/start`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchGrant {
    pub ticket: String,
    pub points: i64,
    pub ready_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardsPolicy {
    pub watch_secs: u64,
    pub points_per_view: i64,
    pub credit_mode: String,
}

#[derive(Deserialize)]
pub(crate) struct LedgerResponse {
    pub ledger: aw_core::LedgerRecord,
}
