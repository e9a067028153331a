use aw_core::WatchTicket;

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct WatchTicketResponse {
    pub ticket: String,
    pub points: i64,
    pub ready_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl From<WatchTicket> for WatchTicketResponse {
    fn from(ticket: WatchTicket) -> Self {
        Self {
            ticket: ticket.id.to_string(),
            points: ticket.points,
            ready_at: ticket.ready_at,
            expires_at: ticket.expires_at,
        }
    }
}
