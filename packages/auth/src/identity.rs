//! # HTTP identity backend
//!
//! [`IdentityToolkit`] creates accounts through an Identity-Toolkit-compatible
//! REST endpoint (`POST /v1/accounts:signUp`). The service answers failures with
//! a JSON body whose `error.message` starts with an upper-case reason such as
//! `EMAIL_EXISTS` or `WEAK_PASSWORD : Password should be at least 6 characters`.
//! [`code_for_reason`] turns that reason into one of the [`codes`].
//!
//! Only the user id and email from a successful response are kept; tokens are
//! dropped.

use std::sync::Arc;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::backend::{AuthBackend, Session};
use crate::config::IdentityConfig;
use crate::error::{codes, ProviderError};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SignUpRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignUpResponse {
    local_id: String,
    email: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Account backend that calls a hosted identity service over HTTP.
#[derive(Clone)]
pub struct IdentityToolkit {
    http: Client,
    config: IdentityConfig,
    session: Arc<watch::Sender<Option<Session>>>,
}

impl IdentityToolkit {
    pub fn new(config: IdentityConfig) -> Self {
        let (session, _) = watch::channel(None);
        Self {
            http: Client::new(),
            config,
            session: Arc::new(session),
        }
    }
}

impl AuthBackend for IdentityToolkit {
    async fn create_account(&self, email: &str, password: &str) -> Result<Session, ProviderError> {
        let request = SignUpRequest {
            email,
            password,
            return_secure_token: true,
        };

        let response = self
            .http
            .post(self.config.sign_up_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::new(codes::NETWORK_REQUEST_FAILED, e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let err = match response.text().await {
                Ok(body) => parse_error_body(&body),
                Err(e) => {
                    tracing::debug!("could not read sign-up error body: {}", e);
                    unreadable_body_error(e)
                }
            };
            tracing::debug!("sign-up rejected with {}: {}", status, err.code());
            return Err(err);
        }

        let body: SignUpResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::new(codes::INTERNAL_ERROR, e.to_string()))?;

        let session = Session {
            uid: body.local_id,
            email: body.email,
        };
        self.session.send_replace(Some(session.clone()));
        Ok(session)
    }

    fn auth_state(&self) -> watch::Receiver<Option<Session>> {
        self.session.subscribe()
    }
}

/// Convert a failed sign-up response body into a [`ProviderError`].
fn parse_error_body(body: &str) -> ProviderError {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(parsed) => {
            let message = parsed.error.message;
            let reason = message.split(" : ").next().unwrap_or_default().trim();
            ProviderError::new(code_for_reason(reason), message)
        }
        Err(_) => ProviderError::new(codes::INTERNAL_ERROR, body.to_string()),
    }
}

fn unreadable_body_error(cause: impl std::fmt::Display) -> ProviderError {
    ProviderError::new(codes::INTERNAL_ERROR, format!("unreadable response body: {cause}"))
}

/// Map the service's upper-case failure reason to a provider error code.
pub fn code_for_reason(reason: &str) -> &'static str {
    match reason {
        "EMAIL_EXISTS" => codes::EMAIL_ALREADY_IN_USE,
        "INVALID_EMAIL" => codes::INVALID_EMAIL,
        "WEAK_PASSWORD" => codes::WEAK_PASSWORD,
        "MISSING_PASSWORD" => codes::MISSING_PASSWORD,
        "OPERATION_NOT_ALLOWED" => codes::OPERATION_NOT_ALLOWED,
        "TOO_MANY_ATTEMPTS_TRY_LATER" => codes::TOO_MANY_REQUESTS,
        _ => codes::INTERNAL_ERROR,
    }
}
