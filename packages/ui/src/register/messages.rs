//! Text shown for a failed attempt.
//!
//! Validation failures and provider failures are mapped separately; both fall
//! back to [`DEFAULT_ERROR_MESSAGE`] so a raw code never reaches the screen.

use auth::codes;

use super::form::{RegisterError, ValidationError};

pub const DEFAULT_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

const PROVIDER_MESSAGES: &[(&str, &str)] = &[
    (codes::EMAIL_ALREADY_IN_USE, "This email is already in use"),
    (codes::INVALID_EMAIL, "Please input a valid email"),
    (codes::WEAK_PASSWORD, "Password should be at least 6 characters"),
    (codes::MISSING_PASSWORD, "Please input a password"),
    (codes::OPERATION_NOT_ALLOWED, "Registration is currently disabled"),
    (codes::TOO_MANY_REQUESTS, "Too many attempts. Please try again later"),
    (codes::NETWORK_REQUEST_FAILED, "Network error. Please check your connection"),
];

pub fn validation_message(err: ValidationError) -> String {
    err.to_string()
}

/// Message for a provider error code, or the default for codes we don't know.
pub fn provider_message(code: &str) -> &'static str {
    PROVIDER_MESSAGES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, message)| *message)
        .unwrap_or(DEFAULT_ERROR_MESSAGE)
}

pub fn describe(err: &RegisterError) -> String {
    match err {
        RegisterError::Validation(kind) => validation_message(*kind),
        RegisterError::Provider(e) => provider_message(e.code()).to_string(),
    }
}
