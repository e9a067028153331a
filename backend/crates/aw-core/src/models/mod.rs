pub mod credit_command;
pub mod email;
pub mod identity;
pub mod ledger_record;
pub mod points_delta;
pub mod ticket_rejection;
pub mod watch_ticket;
