pub mod auth;
pub mod error;
pub mod extractors;
pub mod ledger;
pub mod points;
pub mod rewards;
pub mod watch;
