use crate::ApiError;

use aw_auth::AuthError;
use aw_core::{CoreError, Email};
use aw_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use googletest::prelude::*;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn given_not_found_when_rendered_then_404_with_json_body() {
    // Given
    let error = ApiError::NotFound {
        message: "No document: users/ghost".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    // When
    let (status, json) = body_json(error).await;

    // Then
    assert_that!(status, eq(StatusCode::NOT_FOUND));
    assert_that!(json["error"]["code"], eq("NOT_FOUND"));
    assert_that!(json["error"]["message"], eq("No document: users/ghost"));
}

#[tokio::test]
async fn given_core_validation_error_when_converted_then_400_with_field() {
    // Given
    let core = Email::parse("not-an-email").unwrap_err();

    // When
    let (status, json) = body_json(ApiError::from(core)).await;

    // Then
    assert_that!(status, eq(StatusCode::BAD_REQUEST));
    assert_that!(json["error"]["code"], eq("VALIDATION_ERROR"));
    assert_that!(json["error"]["message"], eq("The email address is badly formatted."));
    assert_that!(json["error"]["field"], eq("email"));
}

#[tokio::test]
async fn given_weak_password_when_converted_then_validation_error() {
    // Given
    let weak = aw_auth::validate_password("abc").unwrap_err();

    // When
    let (status, json) = body_json(ApiError::from(weak)).await;

    // Then
    assert_that!(status, eq(StatusCode::BAD_REQUEST));
    assert_that!(json["error"]["field"], eq("password"));
    assert_that!(
        json["error"]["message"],
        eq("Password should be at least 6 characters")
    );
}

#[tokio::test]
async fn given_missing_auth_header_when_converted_then_401() {
    // Given
    let error = AuthError::MissingHeader {
        location: ErrorLocation::from(Location::caller()),
    };

    // When
    let (status, json) = body_json(ApiError::from(error)).await;

    // Then
    assert_that!(status, eq(StatusCode::UNAUTHORIZED));
    assert_that!(json["error"]["code"], eq("UNAUTHORIZED"));
}

#[tokio::test]
async fn given_sqlx_error_when_converted_then_internal_without_details() {
    // Given
    let error = DbError::from(sqlx::Error::PoolTimedOut);

    // When
    let (status, json) = body_json(ApiError::from(error)).await;

    // Then
    assert_that!(status, eq(StatusCode::INTERNAL_SERVER_ERROR));
    assert_that!(json["error"]["message"], eq("Database operation failed"));
}

#[tokio::test]
async fn given_db_conflict_when_converted_then_409() {
    // Given
    let error = DbError::Conflict {
        message: "Email a@example.com is already registered".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    // When
    let (status, json) = body_json(ApiError::from(error)).await;

    // Then
    assert_that!(status, eq(StatusCode::CONFLICT));
    assert_that!(json["error"]["code"], eq("CONFLICT"));
}

#[test]
fn given_core_error_when_converted_then_location_is_not_in_message() {
    // Given
    let core = CoreError::Validation {
        message: "Missing uid or points".into(),
        field: Some("uid".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    // When
    let api = ApiError::from(core);

    // Then
    match api {
        ApiError::Validation { message, field, .. } => {
            assert_that!(message, eq("Missing uid or points"));
            assert_that!(field, some(eq("uid")));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn given_db_overflow_when_converted_then_409() {
    let error = DbError::Overflow {
        path: "users/user-1".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(ApiError::from(error)).await;

    assert_that!(status, eq(StatusCode::CONFLICT));
    assert_that!(json["error"]["message"], eq("Points overflow on users/user-1"));
}
