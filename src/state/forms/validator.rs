//! Per-field validation rules for candidate registration
//!
//! Every rule is a pure function of the current form data. An empty string
//! means the field is valid; anything else is the message shown beneath it.

use super::field::RegisterField;
use super::form_state::FormData;
use regex::Regex;
use std::sync::LazyLock;

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MIN_AGE: f64 = 18.0;
pub const MAX_AGE: f64 = 65.0;
pub const MOBILE_DIGITS: usize = 10;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

/// Evaluate the rule for `field` against the current form data
pub fn validate_field(field: RegisterField, data: &FormData) -> String {
    let value = data.get(field);
    let message = match field {
        RegisterField::Name => validate_name(value),
        RegisterField::Email => validate_email(value),
        RegisterField::Password => validate_password(value),
        RegisterField::ConfirmPassword => validate_confirm_password(value, &data.password),
        RegisterField::Mobile => validate_mobile(value),
        RegisterField::Age => validate_age(value),
        RegisterField::Place => required(value, "Place is required."),
        RegisterField::Qualification => required(value, "Qualification is required."),
        RegisterField::Experience => required(value, "Experience is required."),
    };
    message.map(str::to_string).unwrap_or_default()
}

fn required(value: &str, message: &'static str) -> Option<&'static str> {
    value.trim().is_empty().then_some(message)
}

fn validate_name(value: &str) -> Option<&'static str> {
    if value.trim().is_empty() {
        Some("Name is required.")
    } else if value.chars().any(|c| c.is_ascii_digit()) {
        Some("Name cannot contain numbers.")
    } else {
        None
    }
}

fn validate_email(value: &str) -> Option<&'static str> {
    if value.trim().is_empty() {
        Some("Email is required.")
    } else if !EMAIL_REGEX.is_match(value) {
        Some("Enter a valid email.")
    } else {
        None
    }
}

fn validate_password(value: &str) -> Option<&'static str> {
    (value.chars().count() < MIN_PASSWORD_LEN).then_some("Password must be at least 6 characters.")
}

fn validate_confirm_password(value: &str, password: &str) -> Option<&'static str> {
    (value != password).then_some("Passwords do not match.")
}

fn validate_mobile(value: &str) -> Option<&'static str> {
    let valid = value.len() == MOBILE_DIGITS && value.chars().all(|c| c.is_ascii_digit());
    (!valid).then_some("Mobile must be 10 digits.")
}

fn validate_age(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        return Some("Age is required.");
    }
    match parse_age(value) {
        Some(age) if (MIN_AGE..=MAX_AGE).contains(&age) => None,
        _ => Some("Age must be between 18 and 65."),
    }
}

/// Parse an age as a whole number, tolerating surrounding whitespace.
/// Blank, non-numeric, non-finite and fractional inputs yield `None`.
fn parse_age(value: &str) -> Option<f64> {
    let age: f64 = value.trim().parse().ok()?;
    (age.is_finite() && age.fract() == 0.0).then_some(age)
}
