pub mod auth;
pub mod credentials_request;
pub mod session_response;
