use crate::{CoreError, MISSING_UID_OR_POINTS, NON_POSITIVE_POINTS, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// A validated, strictly positive increment for a ledger's `points` field.
///
/// Zero is rejected together with "missing": a zero credit has no effect on
/// the ledger and callers sending it are almost always sending an unset value.
/// Negative values are rejected so the ledger can only grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct PointsDelta(i64);

impl PointsDelta {
    #[track_caller]
    pub fn new(value: i64) -> CoreErrorResult<Self> {
        if value == 0 {
            return Err(CoreError::Validation {
                message: MISSING_UID_OR_POINTS.to_string(),
                field: Some("points".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if value < 0 {
            return Err(CoreError::Validation {
                message: NON_POSITIVE_POINTS.to_string(),
                field: Some("points".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self(value))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for PointsDelta {
    type Error = CoreError;

    #[track_caller]
    fn try_from(value: i64) -> CoreErrorResult<Self> {
        Self::new(value)
    }
}

impl From<PointsDelta> for i64 {
    fn from(delta: PointsDelta) -> Self {
        delta.0
    }
}

impl std::fmt::Display for PointsDelta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
