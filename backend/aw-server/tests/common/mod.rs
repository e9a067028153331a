#![allow(dead_code)]

//! Test infrastructure for aw-server API tests

use aw_config::{Config, CreditMode};
use aw_server::{AppState, build_router};

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

pub const TEST_SECRET: &[u8] = b"integration-test-secret-at-least-32-bytes";
pub const TEST_PASSWORD: &str = "hunter22";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .expect("Failed to create test database");

    aw_db::migrate(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub fn test_config(mode: CreditMode) -> Config {
    let mut config = Config::default();
    config.rewards.credit_mode = mode;
    config
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    create_test_app_state_with(&test_config(CreditMode::Open)).await
}

pub async fn create_test_app_state_with(config: &Config) -> AppState {
    AppState::new(create_test_pool().await, config, TEST_SECRET)
}

/// Send one request through a fresh router and decode the JSON body
pub async fn send(
    state: &AppState,
    request: Request<Body>,
) -> (StatusCode, serde_json::Value) {
    let response = build_router(state.clone()).oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null)
    };
    (status, json)
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn authed(
    method: &str,
    uri: &str,
    token: &str,
    body: Option<serde_json::Value>,
) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("Authorization", format!("Bearer {}", token));

    match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Sign up through the API; returns (uid, token)
pub async fn sign_up(state: &AppState, email: &str) -> (String, String) {
    let (status, json) = send(
        state,
        json_request(
            "POST",
            "/api/v1/auth/signup",
            serde_json::json!({ "email": email, "password": TEST_PASSWORD }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "signup failed: {json}");

    (
        json["uid"].as_str().unwrap().to_string(),
        json["token"].as_str().unwrap().to_string(),
    )
}

pub async fn points_of(pool: &SqlitePool, uid: &str) -> Option<i64> {
    aw_db::LedgerRepository::new(pool.clone())
        .find_by_uid(uid)
        .await
        .unwrap()
        .map(|record| record.points)
}

pub async fn add_points(state: &AppState, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
    send(state, json_request("POST", "/api/addPoints", body)).await
}
