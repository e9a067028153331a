use crate::{Email, Identity};

use googletest::prelude::*;

#[test]
fn test_new_identity_has_fresh_uid() {
    let a = Identity::new(Email::parse("a@example.com").unwrap(), "hash".into());
    let b = Identity::new(Email::parse("a@example.com").unwrap(), "hash".into());

    assert_that!(a.uid, not(eq(&b.uid)));
}

#[test]
fn test_ledger_record_pairs_with_identity() {
    let identity = Identity::new(Email::parse("a@example.com").unwrap(), "hash".into());
    let record = identity.ledger_record();

    assert_that!(record.uid, eq(&identity.uid));
    assert_that!(record.email, eq("a@example.com"));
    assert_that!(record.points, eq(0));
    assert_that!(record.created_at, eq(identity.created_at));
}

#[test]
fn test_password_hash_is_not_serialized() {
    let identity = Identity::new(Email::parse("a@example.com").unwrap(), "secret".into());
    let json = serde_json::to_string(&identity).unwrap();

    assert_that!(json, not(contains_substring("secret")));
    assert_that!(json, contains_substring("a@example.com"));
}
