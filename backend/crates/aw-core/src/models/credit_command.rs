//! Validated input for a single ledger credit.

use crate::{CoreError, PointsDelta, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Fixed message for a credit request lacking a uid or a usable delta
pub const MISSING_UID_OR_POINTS: &str = "Missing uid or points";
/// Message for a credit request trying to debit the ledger
pub const NON_POSITIVE_POINTS: &str = "Points must be a positive integer";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreditCommand {
    pub uid: String,
    pub delta: PointsDelta,
}

impl CreditCommand {
    /// Build a command from raw request fields.
    ///
    /// An empty uid counts as missing. The uid is otherwise opaque and is not
    /// checked against any format.
    #[track_caller]
    pub fn from_parts(uid: Option<String>, points: Option<i64>) -> CoreErrorResult<Self> {
        let (uid, points) = match (uid, points) {
            (Some(uid), Some(points)) if !uid.is_empty() => (uid, points),
            (uid, _) => {
                let field = match uid {
                    Some(ref u) if !u.is_empty() => "points",
                    _ => "uid",
                };
                return Err(CoreError::Validation {
                    message: MISSING_UID_OR_POINTS.to_string(),
                    field: Some(field.to_string()),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        Ok(Self {
            uid,
            delta: PointsDelta::new(points)?,
        })
    }
}
