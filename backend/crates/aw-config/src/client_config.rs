use crate::{ConfigError, ConfigErrorResult, DEFAULT_SERVER_URL};

use serde::Deserialize;

/// Settings used by the `aw` command-line client
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub server_url: String,
    pub api_key: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: String::from(DEFAULT_SERVER_URL),
            api_key: None,
        }
    }
}

impl ClientConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.server_url.starts_with("http://") && !self.server_url.starts_with("https://") {
            return Err(ConfigError::client(format!(
                "client.server_url must start with http:// or https://, got '{}'",
                self.server_url
            )));
        }
        Ok(())
    }
}
