use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use jsonwebtoken::errors::{Error as JwtError, ErrorKind};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

/// Clock skew tolerated when checking `exp`, in seconds
pub const DEFAULT_LEEWAY_SECS: u64 = 30;

/// Checks session tokens minted by [`crate::JwtIssuer`] with the same secret
pub struct JwtValidator {
    key: DecodingKey,
    rules: Validation,
}

impl JwtValidator {
    pub fn with_hs256(secret: &[u8]) -> Self {
        Self::with_hs256_leeway(secret, DEFAULT_LEEWAY_SECS)
    }

    pub fn with_hs256_leeway(secret: &[u8], leeway_secs: u64) -> Self {
        let mut rules = Validation::new(Algorithm::HS256);
        rules.leeway = leeway_secs;
        rules.set_required_spec_claims(&["exp", "sub"]);

        Self {
            key: DecodingKey::from_secret(secret),
            rules,
        }
    }

    /// Decode `token`, verify signature and expiry, then sanity-check the claims.
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<Claims> {
        let claims = decode::<Claims>(token, &self.key, &self.rules)
            .map_err(decode_error)?
            .claims;

        claims.validate()?;
        Ok(claims)
    }
}

#[track_caller]
fn decode_error(source: JwtError) -> AuthError {
    let location = ErrorLocation::from(Location::caller());

    if matches!(source.kind(), ErrorKind::ExpiredSignature) {
        AuthError::TokenExpired { location }
    } else {
        AuthError::JwtDecode { source, location }
    }
}
