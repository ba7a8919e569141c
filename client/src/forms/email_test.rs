use super::*;

#[test]
fn accepts_common_addresses() {
    for email in [
        "user@example.com",
        "first.last@example.co.uk",
        "o'brien+tag@mail-server.example.org",
        "UPPER@EXAMPLE.COM",
        "a_b-c@sub.domain.io",
    ] {
        assert!(is_valid_email(email), "expected valid: {email:?}");
    }
}

#[test]
fn rejects_malformed_addresses() {
    for email in [
        "",
        "plainaddress",
        "@example.com",
        "user@",
        "user@example",
        "user@example.c",
        "user@@example.com",
        "user example@example.com",
        " user@example.com",
        "user@example.com ",
        "user@-example.com",
        "user@example..com",
    ] {
        assert!(!is_valid_email(email), "expected invalid: {email:?}");
    }
}

#[test]
fn rejects_leading_dot_and_consecutive_dots_in_local_part() {
    assert!(!is_valid_email(".user@example.com"));
    assert!(!is_valid_email("us..er@example.com"));
}

#[test]
fn rejects_local_part_ending_in_dot() {
    assert!(!is_valid_email("user.@example.com"));
}

#[test]
fn rejects_numeric_tld() {
    assert!(!is_valid_email("user@example.123"));
}
