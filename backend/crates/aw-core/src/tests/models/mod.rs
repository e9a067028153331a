mod credit_command;
mod email;
mod identity;
mod watch_ticket;
