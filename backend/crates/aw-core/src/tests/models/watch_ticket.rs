use crate::{TicketRejection, WatchTicket};

use chrono::{TimeDelta, Utc};
use googletest::prelude::*;

fn ticket() -> WatchTicket {
    WatchTicket::issue(
        "user-1".into(),
        10,
        TimeDelta::seconds(10),
        TimeDelta::seconds(300),
        Utc::now(),
    )
}

#[test]
fn given_ready_ticket_when_checked_by_owner_then_ok() {
    let ticket = ticket();
    let now = ticket.ready_at;

    assert_that!(ticket.check_redeemable("user-1", 10, now), ok(anything()));
}

#[test]
fn given_ticket_before_ready_when_checked_then_not_ready() {
    let ticket = ticket();
    let now = ticket.issued_at + TimeDelta::seconds(9);

    let result = ticket.check_redeemable("user-1", 10, now);

    assert!(matches!(result, Err(TicketRejection::NotReady { .. })));
}

#[test]
fn given_other_user_when_checked_then_wrong_owner() {
    let ticket = ticket();

    let result = ticket.check_redeemable("user-2", 10, ticket.ready_at);

    assert_that!(result, err(eq(&TicketRejection::WrongOwner)));
}

#[test]
fn given_different_points_when_checked_then_mismatch() {
    let ticket = ticket();

    let result = ticket.check_redeemable("user-1", 1000, ticket.ready_at);

    assert_that!(
        result,
        err(eq(&TicketRejection::PointsMismatch {
            expected: 10,
            actual: 1000
        }))
    );
}

#[test]
fn given_expired_ticket_when_checked_then_expired() {
    let ticket = ticket();

    let result = ticket.check_redeemable("user-1", 10, ticket.expires_at);

    assert_that!(result, err(eq(&TicketRejection::Expired)));
}

#[test]
fn given_consumed_ticket_when_checked_then_already_consumed() {
    let mut ticket = ticket();
    ticket.consumed_at = Some(ticket.ready_at);

    let result = ticket.check_redeemable("user-1", 10, ticket.ready_at);

    assert_that!(result, err(eq(&TicketRejection::AlreadyConsumed)));
}
