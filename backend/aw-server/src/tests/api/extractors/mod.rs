mod api_key;
mod session_user;
