use std::path::Path;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    aw_db::migrate(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Creates a file-backed pool with several connections, for tests that need
/// real concurrent writers
pub async fn create_file_pool(dir: &Path) -> SqlitePool {
    let pool = aw_db::connect(&dir.join("test.db"), 8)
        .await
        .expect("Failed to create file pool");

    aw_db::migrate(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}
