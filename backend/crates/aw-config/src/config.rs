use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ClientConfig, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, DatabaseConfig, LoggingConfig, ProjectConfig, RewardsConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub project: ProjectConfig,
    pub rewards: RewardsConfig,
    pub client: ClientConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for AW_CONFIG_DIR env var, else use ./.aw/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply AW_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: AW_CONFIG_DIR env var > ./.aw/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.rewards.validate()?;
        self.client.validate()?;

        if let Some(key) = &self.project.api_key
            && key.trim().is_empty()
        {
            return Err(ConfigError::config(
                "project.api_key cannot be blank when set",
            ));
        }

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Get absolute path to the log file, when file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(file) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(file),
            )),
            None => Ok(None),
        }
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  database: {} (max {} connections)",
            self.database.path, self.database.max_connections
        );
        info!(
            "  auth: HS256 ({}), token ttl {}s",
            if self.auth.jwt_secret.is_some() {
                "configured secret"
            } else {
                "ephemeral secret"
            },
            self.auth.token_ttl_secs
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
        info!(
            "  project: id={}, app={}, api key {}",
            self.project.project_id.as_deref().unwrap_or("-"),
            self.project.app_id.as_deref().unwrap_or("-"),
            if self.project.api_key.is_some() {
                "required"
            } else {
                "not required"
            }
        );
        info!(
            "  rewards: {} points per {}s view, credit mode {}, ticket ttl {}s, max {} open tickets",
            self.rewards.points_per_view,
            self.rewards.watch_secs,
            self.rewards.credit_mode,
            self.rewards.ticket_ttl_secs,
            self.rewards.max_open_tickets
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("AW_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("AW_SERVER_PORT", &mut self.server.port);
        Self::apply_env_list("AW_SERVER_CORS_ORIGINS", &mut self.server.cors_origins);

        // Database
        Self::apply_env_string("AW_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "AW_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Auth
        Self::apply_env_option_string("AW_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_parse("AW_AUTH_TOKEN_TTL_SECS", &mut self.auth.token_ttl_secs);

        // Logging
        Self::apply_env_parse("AW_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("AW_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_string("AW_LOG_DIR", &mut self.logging.dir);
        Self::apply_env_option_string("AW_LOG_FILE", &mut self.logging.file);

        // Project
        Self::apply_env_option_string("AW_PROJECT_ID", &mut self.project.project_id);
        Self::apply_env_option_string("AW_APP_ID", &mut self.project.app_id);
        Self::apply_env_option_string("AW_API_KEY", &mut self.project.api_key);

        // Rewards
        Self::apply_env_parse("AW_REWARDS_WATCH_SECS", &mut self.rewards.watch_secs);
        Self::apply_env_parse(
            "AW_REWARDS_POINTS_PER_VIEW",
            &mut self.rewards.points_per_view,
        );
        Self::apply_env_parse("AW_REWARDS_CREDIT_MODE", &mut self.rewards.credit_mode);
        Self::apply_env_parse(
            "AW_REWARDS_TICKET_TTL_SECS",
            &mut self.rewards.ticket_ttl_secs,
        );
        Self::apply_env_parse(
            "AW_REWARDS_MAX_OPEN_TICKETS",
            &mut self.rewards.max_open_tickets,
        );

        // Client
        Self::apply_env_string("AW_SERVER_URL", &mut self.client.server_url);
        Self::apply_env_option_string("AW_CLIENT_API_KEY", &mut self.client.api_key);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }

    /// Helper: Apply environment variable override for comma-separated lists
    fn apply_env_list(var_name: &str, target: &mut Vec<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }
    }
}
