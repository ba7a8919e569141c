//! Email address grammar shared by every form with an email input.

#[cfg(test)]
#[path = "email_test.rs"]
mod email_test;

use std::sync::LazyLock;

use regex::Regex;

/// Local part, `@`, one or more dot-terminated labels, then a TLD of two or
/// more letters. The leading-dot and `..` rules are checked separately since
/// `regex` has no lookahead.
static EMAIL_PATTERN: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@(?:[A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
});

/// Whether `value` is a syntactically valid email address.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    if value.starts_with('.') || value.contains("..") {
        return false;
    }
    EMAIL_PATTERN
        .as_ref()
        .is_ok_and(|regex| regex.is_match(value))
}
