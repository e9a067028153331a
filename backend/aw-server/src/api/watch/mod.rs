pub mod watch;
pub mod watch_ticket_response;
