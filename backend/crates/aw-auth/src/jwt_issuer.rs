use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;

use chrono::{DateTime, TimeDelta, Utc};
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

/// A freshly signed session token
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Signs HS256 session tokens with a fixed lifetime
pub struct JwtIssuer {
    encoding_key: EncodingKey,
    ttl: TimeDelta,
}

impl JwtIssuer {
    pub fn with_hs256(secret: &[u8], ttl_secs: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            ttl: TimeDelta::seconds(i64::try_from(ttl_secs).unwrap_or(i64::MAX / 1000)),
        }
    }

    #[track_caller]
    pub fn issue(&self, uid: &str, email: &str) -> AuthErrorResult<IssuedToken> {
        self.issue_at(uid, email, Utc::now())
    }

    #[track_caller]
    pub fn issue_at(
        &self,
        uid: &str,
        email: &str,
        now: DateTime<Utc>,
    ) -> AuthErrorResult<IssuedToken> {
        let expires_at = now + self.ttl;
        let claims = Claims {
            sub: uid.to_string(),
            email: email.to_string(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|source| AuthError::JwtEncode {
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(IssuedToken { token, expires_at })
    }
}
