pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::credit_command::{CreditCommand, MISSING_UID_OR_POINTS, NON_POSITIVE_POINTS};
pub use models::email::Email;
pub use models::identity::Identity;
pub use models::ledger_record::{LEDGER_COLLECTION, LedgerRecord};
pub use models::points_delta::PointsDelta;
pub use models::ticket_rejection::TicketRejection;
pub use models::watch_ticket::WatchTicket;

#[cfg(test)]
mod tests;
