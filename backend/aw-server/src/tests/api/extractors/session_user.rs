use crate::SessionUser;
use crate::tests::create_test_state;

use aw_config::Config;

use axum::{body::Body, extract::FromRequestParts, http::Request};
use googletest::prelude::*;

#[tokio::test]
async fn given_valid_bearer_when_extracting_then_returns_subject() {
    // Given
    let state = create_test_state(&Config::default()).await;
    let issued = state.jwt_issuer.issue("user-1", "a@example.com").unwrap();
    let request = Request::builder()
        .header("Authorization", format!("Bearer {}", issued.token))
        .body(Body::empty())
        .unwrap();
    let (mut parts, _) = request.into_parts();

    // When
    let user = SessionUser::from_request_parts(&mut parts, &state)
        .await
        .unwrap();

    // Then
    assert_that!(
        user,
        eq(&SessionUser {
            uid: "user-1".into(),
            email: "a@example.com".into(),
        })
    );
}

#[tokio::test]
async fn given_no_header_when_extracting_then_rejected() {
    // Given
    let state = create_test_state(&Config::default()).await;
    let request = Request::builder().body(Body::empty()).unwrap();
    let (mut parts, _) = request.into_parts();

    // When
    let result = SessionUser::from_request_parts(&mut parts, &state).await;

    // Then
    assert!(result.is_err());
}

#[tokio::test]
async fn given_token_signed_with_other_secret_when_extracting_then_rejected() {
    // Given
    let state = create_test_state(&Config::default()).await;
    let foreign = aw_auth::JwtIssuer::with_hs256(b"some-other-secret-that-is-32-bytes!!", 3600)
        .issue("user-1", "a@example.com")
        .unwrap();
    let request = Request::builder()
        .header("Authorization", format!("Bearer {}", foreign.token))
        .body(Body::empty())
        .unwrap();
    let (mut parts, _) = request.into_parts();

    // When
    let result = SessionUser::from_request_parts(&mut parts, &state).await;

    // Then
    assert!(result.is_err());
}
