use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_TOKEN_TTL_SECS, MAX_TOKEN_TTL_SECS,
    MIN_JWT_SECRET_LENGTH, MIN_TOKEN_TTL_SECS,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret. When unset the server signs with a per-process
    /// random secret and sessions do not survive a restart.
    pub jwt_secret: Option<String>,
    pub token_ttl_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(secret) = &self.jwt_secret
            && secret.len() < MIN_JWT_SECRET_LENGTH
        {
            return Err(ConfigError::auth(format!(
                "auth.jwt_secret must be at least {} characters",
                MIN_JWT_SECRET_LENGTH
            )));
        }

        if !(MIN_TOKEN_TTL_SECS..=MAX_TOKEN_TTL_SECS).contains(&self.token_ttl_secs) {
            return Err(ConfigError::auth(format!(
                "auth.token_ttl_secs must be {}-{}, got {}",
                MIN_TOKEN_TTL_SECS, MAX_TOKEN_TTL_SECS, self.token_ttl_secs
            )));
        }

        Ok(())
    }
}
