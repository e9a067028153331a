use aw_auth::IssuedToken;

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub uid: String,
    pub email: String,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl SessionResponse {
    pub fn new(uid: String, email: String, issued: IssuedToken) -> Self {
        Self {
            uid,
            email,
            token: issued.token,
            expires_at: issued.expires_at,
        }
    }
}
