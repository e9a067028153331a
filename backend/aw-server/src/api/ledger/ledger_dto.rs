use aw_core::LedgerRecord;

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LedgerDto {
    pub uid: String,
    pub email: String,
    pub points: i64,
    pub created_at: DateTime<Utc>,
}

impl From<LedgerRecord> for LedgerDto {
    fn from(record: LedgerRecord) -> Self {
        Self {
            uid: record.uid,
            email: record.email,
            points: record.points,
            created_at: record.created_at,
        }
    }
}
