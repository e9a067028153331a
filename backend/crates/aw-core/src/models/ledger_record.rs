//! Ledger record - the per-user document tracking accumulated reward points.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Collection name used when reporting store failures (`users/<uid>`)
pub const LEDGER_COLLECTION: &str = "users";

/// One record per user. `points` starts at zero and only ever grows through
/// atomic increments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerRecord {
    pub uid: String,
    pub email: String,
    pub points: i64,
    pub created_at: DateTime<Utc>,
}

impl LedgerRecord {
    /// Create an empty ledger for a freshly registered user
    pub fn new(uid: String, email: String) -> Self {
        Self {
            uid,
            email,
            points: 0,
            created_at: Utc::now(),
        }
    }

    /// Document path in `collection/key` form
    pub fn path(uid: &str) -> String {
        format!("{}/{}", LEDGER_COLLECTION, uid)
    }
}
