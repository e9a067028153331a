//! Watch ticket - server-minted proof that a watch cycle was started.
//!
//! A ticket is issued when the client starts watching and becomes redeemable
//! once the watch duration has elapsed. It can be redeemed exactly once and
//! only by the user it was issued to.

use crate::TicketRejection;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchTicket {
    pub id: Uuid,
    pub uid: String,
    pub points: i64,
    pub issued_at: DateTime<Utc>,
    pub ready_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub consumed_at: Option<DateTime<Utc>>,
}

impl WatchTicket {
    pub fn issue(
        uid: String,
        points: i64,
        watch_duration: TimeDelta,
        ttl: TimeDelta,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            uid,
            points,
            issued_at: now,
            ready_at: now + watch_duration,
            expires_at: now + ttl,
            consumed_at: None,
        }
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed_at.is_some()
    }

    /// Check whether `uid` may redeem this ticket for `points` at `now`.
    pub fn check_redeemable(
        &self,
        uid: &str,
        points: i64,
        now: DateTime<Utc>,
    ) -> Result<(), TicketRejection> {
        if self.is_consumed() {
            return Err(TicketRejection::AlreadyConsumed);
        }
        if self.uid != uid {
            return Err(TicketRejection::WrongOwner);
        }
        if self.points != points {
            return Err(TicketRejection::PointsMismatch {
                expected: self.points,
                actual: points,
            });
        }
        if now < self.ready_at {
            return Err(TicketRejection::NotReady {
                ready_at: self.ready_at,
            });
        }
        if now >= self.expires_at {
            return Err(TicketRejection::Expired);
        }
        Ok(())
    }
}
