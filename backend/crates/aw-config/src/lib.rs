mod auth_config;
mod client_config;
mod config;
mod credit_mode;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod project_config;
mod rewards_config;
mod server_config;
mod session_file;

pub use auth_config::AuthConfig;
pub use client_config::ClientConfig;
pub use config::Config;
pub use credit_mode::CreditMode;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use project_config::ProjectConfig;
pub use rewards_config::RewardsConfig;
pub use server_config::ServerConfig;
pub use session_file::SessionFile;

pub const CONFIG_DIR_ENV: &str = "AW_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".aw";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "data.db";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
const MIN_DB_MAX_CONNECTIONS: u32 = 1;
const MAX_DB_MAX_CONNECTIONS: u32 = 100;

const MIN_JWT_SECRET_LENGTH: usize = 32;
const DEFAULT_TOKEN_TTL_SECS: u64 = 3600;
const MIN_TOKEN_TTL_SECS: u64 = 60;
const MAX_TOKEN_TTL_SECS: u64 = 30 * 24 * 3600;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_WATCH_SECS: u64 = 10;
const MIN_WATCH_SECS: u64 = 1;
const MAX_WATCH_SECS: u64 = 3600;
const DEFAULT_POINTS_PER_VIEW: i64 = 10;
const MAX_POINTS_PER_VIEW: i64 = 1_000_000;
const DEFAULT_TICKET_TTL_SECS: u64 = 300;
const DEFAULT_MAX_OPEN_TICKETS: u32 = 3;
const MAX_MAX_OPEN_TICKETS: u32 = 100;

const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

#[cfg(test)]
mod tests;
