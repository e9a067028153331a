use crate::{DbError, Result as DbErrorResult};

use std::panic::Location;
use std::path::Path;
use std::time::Duration;

use error_location::ErrorLocation;
use log::info;
use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};

/// Embedded schema migrations
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Open (creating if needed) the SQLite document store at `path`.
pub async fn connect(path: &Path, max_connections: u32) -> DbErrorResult<SqlitePool> {
    info!("Connecting to database: {}", path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(path)
                .create_if_missing(true)
                .foreign_keys(true)
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .busy_timeout(Duration::from_secs(5)),
        )
        .await?;

    info!("Database connection established");
    Ok(pool)
}

/// Run all pending migrations
pub async fn migrate(pool: &SqlitePool) -> DbErrorResult<()> {
    info!("Running database migrations...");
    MIGRATOR.run(pool).await.map_err(|e| DbError::Migration {
        message: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;
    info!("Migrations complete");
    Ok(())
}
