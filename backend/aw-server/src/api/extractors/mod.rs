pub mod api_key;
pub mod session_user;
