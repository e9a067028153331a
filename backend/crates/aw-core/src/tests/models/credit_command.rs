use crate::{CoreError, CreditCommand, MISSING_UID_OR_POINTS, NON_POSITIVE_POINTS};

use googletest::prelude::*;

#[test]
fn given_uid_and_positive_points_when_built_then_ok() {
    let command = CreditCommand::from_parts(Some("user-1".into()), Some(10)).unwrap();

    assert_that!(command.uid, eq("user-1"));
    assert_that!(command.delta.get(), eq(10));
}

#[test]
fn given_missing_uid_when_built_then_missing_message_on_uid_field() {
    let err = CreditCommand::from_parts(None, Some(10)).unwrap_err();

    assert_that!(err.message(), eq(MISSING_UID_OR_POINTS));
    assert_that!(err.field(), some(eq("uid")));
}

#[test]
fn given_empty_uid_when_built_then_treated_as_missing() {
    let err = CreditCommand::from_parts(Some(String::new()), Some(10)).unwrap_err();

    assert_that!(err.message(), eq(MISSING_UID_OR_POINTS));
    assert_that!(err.field(), some(eq("uid")));
}

#[test]
fn given_missing_points_when_built_then_missing_message_on_points_field() {
    let err = CreditCommand::from_parts(Some("user-1".into()), None).unwrap_err();

    assert_that!(err.message(), eq(MISSING_UID_OR_POINTS));
    assert_that!(err.field(), some(eq("points")));
}

#[test]
fn given_zero_points_when_built_then_rejected_like_missing() {
    // A zero delta is indistinguishable from "no points sent"
    let err = CreditCommand::from_parts(Some("user-1".into()), Some(0)).unwrap_err();

    assert_that!(err.message(), eq(MISSING_UID_OR_POINTS));
}

#[test]
fn given_negative_points_when_built_then_rejected() {
    let err = CreditCommand::from_parts(Some("user-1".into()), Some(-5)).unwrap_err();

    assert!(matches!(err, CoreError::Validation { .. }));
    assert_that!(err.message(), eq(NON_POSITIVE_POINTS));
}

#[test]
fn given_whitespace_uid_when_built_then_kept_opaque() {
    let command = CreditCommand::from_parts(Some(" ".into()), Some(1)).unwrap();

    assert_that!(command.uid, eq(" "));
}
