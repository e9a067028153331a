//! Signed-in session persisted by the CLI between invocations.
//!
//! File location: `<config_dir>/session.json`

use crate::{Config, ConfigError, ConfigErrorResult};

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const SESSION_FILENAME: &str = "session.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionFile {
    pub uid: String,
    pub email: String,
    pub token: String,
    pub expires_at: DateTime<Utc>,
    /// Server the session was issued by
    pub server_url: String,
}

impl SessionFile {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Write to `<config_dir>/session.json`
    pub fn write(&self) -> ConfigErrorResult<PathBuf> {
        self.write_in(&Config::config_dir()?)
    }

    pub fn write_in(&self, config_dir: &Path) -> ConfigErrorResult<PathBuf> {
        if !config_dir.exists() {
            std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.to_path_buf(),
                source: e,
            })?;
        }

        let path = config_dir.join(SESSION_FILENAME);
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::session(format!("Failed to serialize session: {e}")))?;

        std::fs::write(&path, content).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        // The file holds a bearer token
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o600)).map_err(
                |e| ConfigError::Io {
                    path: path.clone(),
                    source: e,
                },
            )?;
        }

        Ok(path)
    }

    /// Returns `Ok(None)` if no session is stored.
    pub fn read() -> ConfigErrorResult<Option<SessionFile>> {
        Self::read_in(&Config::config_dir()?)
    }

    pub fn read_in(config_dir: &Path) -> ConfigErrorResult<Option<SessionFile>> {
        let path = config_dir.join(SESSION_FILENAME);

        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        let session = serde_json::from_str(&content).map_err(|e| {
            ConfigError::session(format!("Invalid session file {}: {e}", path.display()))
        })?;

        Ok(Some(session))
    }

    /// Silently succeeds if the file does not exist.
    pub fn remove() -> ConfigErrorResult<()> {
        Self::remove_in(&Config::config_dir()?)
    }

    pub fn remove_in(config_dir: &Path) -> ConfigErrorResult<()> {
        let path = config_dir.join(SESSION_FILENAME);
        if path.exists() {
            std::fs::remove_file(&path).map_err(|e| ConfigError::Io {
                path: path.clone(),
                source: e,
            })?;
        }
        Ok(())
    }
}
