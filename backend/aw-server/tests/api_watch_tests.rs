//! Integration tests for watch tickets and verified credit mode
mod common;

use crate::common::{
    add_points, authed, create_test_app_state_with, points_of, send, sign_up, test_config,
};

use aw_config::{Config, CreditMode};
use aw_core::WatchTicket;
use aw_db::WatchTicketRepository;
use aw_server::{AppState, MISSING_TICKET};

use axum::http::StatusCode;
use chrono::{TimeDelta, Utc};
use googletest::prelude::*;
use serde_json::json;

async fn verified_state() -> AppState {
    create_test_app_state_with(&test_config(CreditMode::Verified)).await
}

/// Insert a ticket that became redeemable a second ago
async fn ready_ticket(state: &AppState, uid: &str) -> String {
    let now = Utc::now();
    let ticket = WatchTicket::issue(
        uid.to_string(),
        state.rewards.points_per_view,
        TimeDelta::seconds(10),
        TimeDelta::seconds(300),
        now - TimeDelta::seconds(11),
    );
    WatchTicketRepository::new(state.pool.clone())
        .create(&ticket)
        .await
        .unwrap();
    ticket.id.to_string()
}

async fn credit(
    state: &AppState,
    token: &str,
    uid: &str,
    ticket: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let mut body = json!({ "uid": uid, "points": state.rewards.points_per_view });
    if let Some(ticket) = ticket {
        body["ticket"] = json!(ticket);
    }
    send(state, authed("POST", "/api/addPoints", token, Some(body))).await
}

#[tokio::test]
async fn given_session_when_starting_watch_then_201_with_ticket() {
    // Given
    let state = verified_state().await;
    let (uid, token) = sign_up(&state, "a@example.com").await;

    // When
    let (status, body) = send(&state, authed("POST", "/api/v1/watch/start", &token, None)).await;

    // Then
    assert_that!(status, eq(StatusCode::CREATED));
    assert_that!(body["points"], eq(10));
    let id = uuid::Uuid::parse_str(body["ticket"].as_str().unwrap()).unwrap();
    let stored = WatchTicketRepository::new(state.pool.clone())
        .find_by_id(id)
        .await
        .unwrap()
        .unwrap();
    assert_that!(stored.uid, eq(uid.as_str()));
    assert_that!(stored.ready_at - stored.issued_at, eq(TimeDelta::seconds(10)));
}

#[tokio::test]
async fn given_no_session_when_starting_watch_then_401() {
    // Given
    let state = verified_state().await;

    // When
    let (status, _) = send(
        &state,
        common::json_request("POST", "/api/v1/watch/start", json!({})),
    )
    .await;

    // Then
    assert_that!(status, eq(StatusCode::UNAUTHORIZED));
}

#[tokio::test]
async fn given_verified_mode_when_ready_ticket_redeemed_then_credited_once() {
    // Given
    let state = verified_state().await;
    let (uid, token) = sign_up(&state, "a@example.com").await;
    let ticket = ready_ticket(&state, &uid).await;

    // When
    let (first, first_body) = credit(&state, &token, &uid, Some(&ticket)).await;
    let (second, second_body) = credit(&state, &token, &uid, Some(&ticket)).await;

    // Then
    assert_that!(first, eq(StatusCode::OK));
    assert_that!(first_body, eq(&json!({ "success": true })));
    assert_that!(second, eq(StatusCode::FORBIDDEN));
    assert_that!(second_body["error"], eq("Ticket already used"));
    assert_that!(points_of(&state.pool, &uid).await, some(eq(10)));
}

#[tokio::test]
async fn given_verified_mode_when_ticket_missing_then_400() {
    // Given
    let state = verified_state().await;
    let (uid, token) = sign_up(&state, "a@example.com").await;

    // When
    let (status, body) = credit(&state, &token, &uid, None).await;

    // Then
    assert_that!(status, eq(StatusCode::BAD_REQUEST));
    assert_that!(body["error"], eq(MISSING_TICKET));
    assert_that!(points_of(&state.pool, &uid).await, some(eq(0)));
}

#[tokio::test]
async fn given_verified_mode_when_ticket_not_ready_then_rejected() {
    // Given
    let state = verified_state().await;
    let (uid, token) = sign_up(&state, "a@example.com").await;
    let (_, started) = send(&state, authed("POST", "/api/v1/watch/start", &token, None)).await;
    let ticket = started["ticket"].as_str().unwrap().to_string();

    // When
    let (status, body) = credit(&state, &token, &uid, Some(&ticket)).await;

    // Then
    assert_that!(status, eq(StatusCode::FORBIDDEN));
    assert_that!(
        body["error"].as_str().unwrap(),
        starts_with("Ad not finished")
    );
    assert_that!(points_of(&state.pool, &uid).await, some(eq(0)));
}

#[tokio::test]
async fn given_verified_mode_when_ticket_belongs_to_other_user_then_rejected() {
    // Given
    let state = verified_state().await;
    let (owner, _) = sign_up(&state, "a@example.com").await;
    let (uid, token) = sign_up(&state, "b@example.com").await;
    let ticket = ready_ticket(&state, &owner).await;

    // When
    let (status, body) = credit(&state, &token, &uid, Some(&ticket)).await;

    // Then
    assert_that!(status, eq(StatusCode::FORBIDDEN));
    assert_that!(body["error"], eq("Ticket does not belong to this user"));
    assert_that!(points_of(&state.pool, &uid).await, some(eq(0)));
}

#[tokio::test]
async fn given_verified_mode_when_crediting_another_uid_then_403() {
    // Given
    let state = verified_state().await;
    let (victim, _) = sign_up(&state, "a@example.com").await;
    let (_, token) = sign_up(&state, "b@example.com").await;
    let ticket = ready_ticket(&state, &victim).await;

    // When
    let (status, _) = credit(&state, &token, &victim, Some(&ticket)).await;

    // Then
    assert_that!(status, eq(StatusCode::FORBIDDEN));
    assert_that!(points_of(&state.pool, &victim).await, some(eq(0)));
}

#[tokio::test]
async fn given_verified_mode_when_no_session_then_401() {
    // Given
    let state = verified_state().await;
    let (uid, _) = sign_up(&state, "a@example.com").await;
    let ticket = ready_ticket(&state, &uid).await;

    // When
    let (status, _) = add_points(
        &state,
        json!({ "uid": uid, "points": 10, "ticket": ticket }),
    )
    .await;

    // Then
    assert_that!(status, eq(StatusCode::UNAUTHORIZED));
    assert_that!(points_of(&state.pool, &uid).await, some(eq(0)));
}

#[tokio::test]
async fn given_rewards_config_when_reading_policy_then_reflects_config() {
    // Given
    let mut config: Config = test_config(CreditMode::Verified);
    config.rewards.watch_secs = 15;
    config.rewards.points_per_view = 25;
    let state = create_test_app_state_with(&config).await;

    // When
    let (status, body) = send(
        &state,
        common::json_request("GET", "/api/v1/rewards", json!(null)),
    )
    .await;

    // Then
    assert_that!(status, eq(StatusCode::OK));
    assert_that!(
        body,
        eq(&json!({ "watch_secs": 15, "points_per_view": 25, "credit_mode": "verified" }))
    );
}

#[tokio::test]
async fn given_open_ticket_cap_reached_when_starting_watch_then_409() {
    // Given: A cap of two, already filled
    let mut config: Config = test_config(CreditMode::Verified);
    config.rewards.max_open_tickets = 2;
    let state = create_test_app_state_with(&config).await;
    let (_, token) = sign_up(&state, "a@example.com").await;
    for _ in 0..2 {
        let (status, _) =
            send(&state, authed("POST", "/api/v1/watch/start", &token, None)).await;
        assert_that!(status, eq(StatusCode::CREATED));
    }

    // When
    let (status, body) = send(&state, authed("POST", "/api/v1/watch/start", &token, None)).await;

    // Then
    assert_that!(status, eq(StatusCode::CONFLICT));
    assert_that!(body["error"]["code"], eq("CONFLICT"));
}

#[tokio::test]
async fn given_redeemed_ticket_when_starting_watch_at_cap_then_slot_freed() {
    // Given: A cap of one, filled by a ticket that is then redeemed
    let mut config: Config = test_config(CreditMode::Verified);
    config.rewards.max_open_tickets = 1;
    let state = create_test_app_state_with(&config).await;
    let (uid, token) = sign_up(&state, "a@example.com").await;
    let ticket = ready_ticket(&state, &uid).await;
    let (status, _) = credit(&state, &token, &uid, Some(&ticket)).await;
    assert_that!(status, eq(StatusCode::OK));

    // When
    let (status, _) = send(&state, authed("POST", "/api/v1/watch/start", &token, None)).await;

    // Then
    assert_that!(status, eq(StatusCode::CREATED));
}

#[tokio::test]
async fn given_expired_ticket_when_starting_watch_then_expired_row_swept() {
    // Given: A ticket whose window closed long ago
    let state = verified_state().await;
    let (uid, token) = sign_up(&state, "a@example.com").await;
    let stale = WatchTicket::issue(
        uid.clone(),
        state.rewards.points_per_view,
        TimeDelta::seconds(10),
        TimeDelta::seconds(300),
        Utc::now() - TimeDelta::seconds(900),
    );
    let tickets = WatchTicketRepository::new(state.pool.clone());
    tickets.create(&stale).await.unwrap();

    // When
    let (status, _) = send(&state, authed("POST", "/api/v1/watch/start", &token, None)).await;

    // Then
    assert_that!(status, eq(StatusCode::CREATED));
    assert_that!(tickets.find_by_id(stale.id).await.unwrap(), none());
}
