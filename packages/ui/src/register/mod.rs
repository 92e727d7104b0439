//! # Registration screen
//!
//! Collects an email and a password twice, checks them locally, asks the
//! [`AuthBackend`](auth::AuthBackend) to create the account, and leaves for the
//! app root on success.
//!
//! - [`form`] — [`FormState`], [`validate`] and [`submit`]; no UI types, so the
//!   whole flow is testable without rendering.
//! - [`messages`] — turns a [`RegisterError`] into the text shown under the form.
//! - [`redirect`] — leaves the screen as soon as the provider reports a session.
//! - `screen` — the [`RegisterScreen`] component.

pub mod form;
pub mod messages;
pub mod redirect;
mod screen;

pub use form::{submit, validate, Credentials, FormState, RegisterError, ValidationError};
pub use messages::{describe, provider_message, validation_message, DEFAULT_ERROR_MESSAGE};
pub use redirect::redirect_when_signed_in;
pub use screen::RegisterScreen;

/// Application root, the destination after registering or when already signed in.
pub const ROOT_PATH: &str = "/";

/// Destination of the "already have an account" link.
pub const LOGIN_PATH: &str = "/login";
