mod api;

use crate::AppState;

use aw_config::Config;

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

pub(crate) const TEST_SECRET: &[u8] = b"unit-test-secret-that-is-long-enough-32";

/// In-memory store; one connection so every query sees the same database
pub(crate) async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .expect("Failed to create test pool");

    aw_db::migrate(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub(crate) async fn create_test_state(config: &Config) -> AppState {
    AppState::new(create_test_pool().await, config, TEST_SECRET)
}
