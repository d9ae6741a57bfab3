//! Per-field validity rules for the registration form.

use std::sync::OnceLock;

use regex::Regex;

/// Minimum password length, in characters
pub const MIN_PASSWORD_LEN: usize = 6;

/// Required mobile number length, in characters
pub const MOBILE_LEN: usize = 10;

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| {
        Regex::new(concat!(
            r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))"#,
            r"@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$",
        ))
        .expect("Invalid regex")
    })
}

pub fn is_username_valid(value: &str) -> bool {
    !value.is_empty()
}

pub fn is_password_valid(value: &str) -> bool {
    value.chars().count() >= MIN_PASSWORD_LEN
}

/// Email shape check.
///
/// Accepts a dotted local part (or a quoted one), `@`, then either a
/// bracketed IPv4 literal or dotted labels ending in a TLD of two or more
/// letters.
pub fn is_email_valid(value: &str) -> bool {
    email_pattern().is_match(value)
}

/// Exactly ten characters. Content is not checked.
pub fn is_mobile_valid(value: &str) -> bool {
    value.chars().count() == MOBILE_LEN
}
