pub mod identity_repository;
pub mod ledger_repository;
pub mod watch_ticket_repository;

use crate::{DbError, Result as DbErrorResult};

use chrono::{DateTime, Utc};

#[track_caller]
pub(crate) fn from_timestamp(value: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(value, 0)
        .ok_or_else(|| DbError::initialization(format!("Invalid timestamp in {}", column)))
}

#[track_caller]
pub(crate) fn from_timestamp_millis(value: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(value)
        .ok_or_else(|| DbError::initialization(format!("Invalid timestamp in {}", column)))
}
