use crate::{ApiError, CreditError};

use aw_core::{CreditCommand, LedgerRecord, TicketRejection};
use aw_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use googletest::prelude::*;
use http::StatusCode;
use http_body_util::BodyExt;

async fn flat_body(error: CreditError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn given_missing_uid_when_rendered_then_flat_400_body() {
    // Given
    let core = CreditCommand::from_parts(None, Some(10)).unwrap_err();

    // When
    let (status, json) = flat_body(CreditError::from(core)).await;

    // Then
    assert_that!(status, eq(StatusCode::BAD_REQUEST));
    assert_that!(json, eq(&serde_json::json!({ "error": "Missing uid or points" })));
}

#[tokio::test]
async fn given_record_not_found_when_rendered_then_500_with_store_message() {
    // Given
    let error = DbError::RecordNotFound {
        path: LedgerRecord::path("ghost"),
        location: ErrorLocation::from(Location::caller()),
    };

    // When
    let (status, json) = flat_body(CreditError::from(error)).await;

    // Then
    assert_that!(status, eq(StatusCode::INTERNAL_SERVER_ERROR));
    assert_that!(json["error"], eq("No document to update: users/ghost"));
}

#[tokio::test]
async fn given_rejected_ticket_when_rendered_then_403_with_reason() {
    // Given
    let error = DbError::TicketRejected {
        reason: TicketRejection::AlreadyConsumed,
        location: ErrorLocation::from(Location::caller()),
    };

    // When
    let (status, json) = flat_body(CreditError::from(error)).await;

    // Then
    assert_that!(status, eq(StatusCode::FORBIDDEN));
    assert_that!(json["error"], eq("Ticket already used"));
}

#[test]
fn given_unauthorized_api_error_when_converted_then_credit_unauthorized() {
    // Given
    let api = ApiError::unauthorized("Missing authorization header");

    // When
    let credit = CreditError::from(api);

    // Then
    assert_that!(credit.status(), eq(StatusCode::UNAUTHORIZED));
    assert_that!(credit.reason(), eq("unauthorized"));
}

#[tokio::test]
async fn given_overflow_when_rendered_then_500_with_store_message() {
    let error = DbError::Overflow {
        path: LedgerRecord::path("user-1"),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = flat_body(CreditError::from(error)).await;

    assert_that!(status, eq(StatusCode::INTERNAL_SERVER_ERROR));
    assert_that!(json["error"], eq("Points overflow on users/user-1"));
}
