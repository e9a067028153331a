//! Identity - credentials for a single account.

use crate::{Email, LedgerRecord};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Opaque user identifier, shared with the ledger record
    pub uid: String,
    pub email: String,
    /// Argon2 PHC string; never serialized into responses
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl Identity {
    /// Create a new identity with a freshly issued uid
    pub fn new(email: Email, password_hash: String) -> Self {
        Self {
            uid: Uuid::new_v4().to_string(),
            email: email.into_inner(),
            password_hash,
            created_at: Utc::now(),
        }
    }

    /// The empty ledger record paired with this identity at sign-up
    pub fn ledger_record(&self) -> LedgerRecord {
        LedgerRecord {
            uid: self.uid.clone(),
            email: self.email.clone(),
            points: 0,
            created_at: self.created_at,
        }
    }
}
