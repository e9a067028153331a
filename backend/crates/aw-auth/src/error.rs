use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid token: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Missing authorization header {location}")]
    MissingHeader { location: ErrorLocation },

    #[error("Invalid authorization scheme: expected 'Bearer' {location}")]
    InvalidScheme { location: ErrorLocation },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("JWT encode failed: {source} {location}")]
    JwtEncode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Weak password: {message} {location}")]
    WeakPassword {
        message: String,
        location: ErrorLocation,
    },

    #[error("Password hashing failed: {message} {location}")]
    PasswordHash {
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidToken { .. } => "INVALID_TOKEN",
            Self::TokenExpired { .. } => "TOKEN_EXPIRED",
            Self::MissingHeader { .. } => "MISSING_AUTH_HEADER",
            Self::InvalidScheme { .. } => "INVALID_AUTH_SCHEME",
            Self::JwtDecode { .. } => "JWT_DECODE_FAILED",
            Self::JwtEncode { .. } => "JWT_ENCODE_FAILED",
            Self::InvalidClaim { .. } => "INVALID_CLAIM",
            Self::WeakPassword { .. } => "WEAK_PASSWORD",
            Self::PasswordHash { .. } => "PASSWORD_HASH_FAILED",
        }
    }

    /// Message without the capture location, safe to hand to API callers
    pub fn message(&self) -> String {
        match self {
            Self::InvalidToken { message, .. } => format!("Invalid token: {message}"),
            Self::TokenExpired { .. } => "Token expired".to_string(),
            Self::MissingHeader { .. } => "Missing authorization header".to_string(),
            Self::InvalidScheme { .. } => {
                "Invalid authorization scheme: expected 'Bearer'".to_string()
            }
            Self::JwtDecode { source, .. } => format!("Invalid token: {source}"),
            Self::JwtEncode { .. } => "Failed to issue session token".to_string(),
            Self::InvalidClaim { claim, message, .. } => {
                format!("Invalid claim '{claim}': {message}")
            }
            Self::WeakPassword { message, .. } => message.clone(),
            Self::PasswordHash { .. } => "Failed to process password".to_string(),
        }
    }

    pub fn field(&self) -> Option<String> {
        match self {
            Self::InvalidClaim { claim, .. } => Some(claim.clone()),
            Self::WeakPassword { .. } => Some("password".to_string()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
