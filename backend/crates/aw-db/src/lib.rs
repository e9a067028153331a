pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::pool::{MIGRATOR, connect, migrate};
pub use error::{DbError, Result};
pub use repositories::identity_repository::IdentityRepository;
pub use repositories::ledger_repository::LedgerRepository;
pub use repositories::watch_ticket_repository::WatchTicketRepository;
