use serde::Deserialize;

/// Body of `POST /api/v1/auth/signup` and `POST /api/v1/auth/login`
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}
