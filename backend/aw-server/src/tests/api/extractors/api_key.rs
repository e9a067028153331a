use crate::ApiKeyGuard;
use crate::tests::create_test_state;

use aw_config::Config;

use axum::{body::Body, extract::FromRequestParts, http::Request};

fn config_with_key(key: Option<&str>) -> Config {
    let mut config = Config::default();
    config.project.api_key = key.map(str::to_string);
    config
}

#[tokio::test]
async fn given_no_configured_key_when_extracting_then_passes() {
    // Given
    let state = create_test_state(&config_with_key(None)).await;
    let (mut parts, _) = Request::builder().body(Body::empty()).unwrap().into_parts();

    // When
    let result = ApiKeyGuard::from_request_parts(&mut parts, &state).await;

    // Then
    assert!(result.is_ok());
}

#[tokio::test]
async fn given_matching_key_when_extracting_then_passes() {
    // Given
    let state = create_test_state(&config_with_key(Some("key-123"))).await;
    let (mut parts, _) = Request::builder()
        .header("X-Api-Key", "key-123")
        .body(Body::empty())
        .unwrap()
        .into_parts();

    // When
    let result = ApiKeyGuard::from_request_parts(&mut parts, &state).await;

    // Then
    assert!(result.is_ok());
}

#[tokio::test]
async fn given_wrong_or_missing_key_when_extracting_then_rejected() {
    // Given
    let state = create_test_state(&config_with_key(Some("key-123"))).await;
    let (mut wrong, _) = Request::builder()
        .header("X-Api-Key", "nope")
        .body(Body::empty())
        .unwrap()
        .into_parts();
    let (mut missing, _) = Request::builder().body(Body::empty()).unwrap().into_parts();

    // When
    let wrong = ApiKeyGuard::from_request_parts(&mut wrong, &state).await;
    let missing = ApiKeyGuard::from_request_parts(&mut missing, &state).await;

    // Then
    assert!(wrong.is_err());
    assert!(missing.is_err());
}
