use crate::Email;

use googletest::prelude::*;

#[test]
fn test_email_is_trimmed_and_lowercased() {
    let email = Email::parse("  A@Example.COM ").unwrap();
    assert_that!(email.as_str(), eq("a@example.com"));
}

#[test]
fn test_email_without_at_is_rejected() {
    assert!(Email::parse("example.com").is_err());
}

#[test]
fn test_email_with_empty_parts_is_rejected() {
    assert!(Email::parse("@example.com").is_err());
    assert!(Email::parse("a@").is_err());
}

#[test]
fn test_email_with_two_at_signs_is_rejected() {
    assert!(Email::parse("a@b@example.com").is_err());
}

#[test]
fn test_email_with_inner_whitespace_is_rejected() {
    assert!(Email::parse("a b@example.com").is_err());
}

#[test]
fn test_invalid_email_message_is_provider_style() {
    let err = Email::parse("nope").unwrap_err();
    assert_that!(err.message(), eq("The email address is badly formatted."));
    assert_that!(err.field(), some(eq("email")));
}
