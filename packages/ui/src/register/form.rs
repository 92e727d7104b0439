//! Form state and the submit flow.

use auth::{AuthBackend, ProviderError, Session};
use thiserror::Error;

use super::messages::describe;
use super::ROOT_PATH;
use crate::navigate::Navigate;

/// Why the form was rejected before reaching the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please input an email")]
    MissingEmail,
    #[error("Please input a password")]
    MissingPassword,
    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Any failure of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Values typed into the form, as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Transient state of one mounted registration screen.
///
/// `error_message` holds the text of the last failed attempt and is cleared when
/// the next attempt starts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub error_message: Option<String>,
}

impl FormState {
    pub fn on_email_change(&mut self, value: String) {
        self.email = value;
    }

    pub fn on_password_change(&mut self, value: String) {
        self.password = value;
    }

    pub fn on_confirm_password_change(&mut self, value: String) {
        self.confirm_password = value;
    }

    /// Start an attempt: drop the previous error and snapshot the inputs.
    pub fn begin_submit(&mut self) -> Credentials {
        self.error_message = None;
        Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
        }
    }

    pub fn record_failure(&mut self, err: &RegisterError) {
        self.error_message = Some(describe(err));
    }

    /// Run a full attempt against `backend`, keeping the inputs either way.
    ///
    /// The screen runs this on a snapshot of its state and copies the error back.
    pub async fn submit<B, N>(&mut self, backend: &B, nav: &N)
    where
        B: AuthBackend,
        N: Navigate,
    {
        let credentials = self.begin_submit();
        if let Err(err) = submit(&credentials, backend, nav).await {
            self.record_failure(&err);
        }
    }
}

/// Check the inputs in order, stopping at the first problem.
pub fn validate(email: &str, password: &str, confirm_password: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::MissingEmail);
    }
    if password.is_empty() || confirm_password.is_empty() {
        return Err(ValidationError::MissingPassword);
    }
    if password != confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

/// Validate, create the account, and go to the app root.
///
/// Calls the provider at most once and navigates only on success.
pub async fn submit<B, N>(credentials: &Credentials, backend: &B, nav: &N) -> Result<Session, RegisterError>
where
    B: AuthBackend,
    N: Navigate,
{
    validate(
        &credentials.email,
        &credentials.password,
        &credentials.confirm_password,
    )?;

    let session = backend
        .create_account(&credentials.email, &credentials.password)
        .await
        .inspect_err(|e| tracing::warn!("Account creation failed: {}", e.code()))?;

    tracing::debug!("Created account {}", session.uid);
    nav.navigate(ROOT_PATH);
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::register::messages::DEFAULT_ERROR_MESSAGE;
    use crate::test_support::RecordingNavigator;
    use auth::{codes, MemoryAuth};

    fn filled(email: &str, password: &str, confirm_password: &str) -> FormState {
        let mut form = FormState::default();
        form.on_email_change(email.to_string());
        form.on_password_change(password.to_string());
        form.on_confirm_password_change(confirm_password.to_string());
        form
    }

    #[test]
    fn test_validate_order() {
        assert_eq!(validate("", "", ""), Err(ValidationError::MissingEmail));
        assert_eq!(validate("", "x", "y"), Err(ValidationError::MissingEmail));
        assert_eq!(validate("a@b.com", "", "x"), Err(ValidationError::MissingPassword));
        assert_eq!(validate("a@b.com", "x", ""), Err(ValidationError::MissingPassword));
        assert_eq!(validate("a@b.com", "x", "y"), Err(ValidationError::PasswordMismatch));
        assert_eq!(validate("a@b.com", "x", "x"), Ok(()));
    }

    #[test]
    fn test_fields_stored_verbatim() {
        let form = filled("  A@B.com ", " pw ", "pw");
        assert_eq!(form.email, "  A@B.com ");
        assert_eq!(form.password, " pw ");
        assert_eq!(form.confirm_password, "pw");
        assert!(form.error_message.is_none());
    }

    #[tokio::test]
    async fn test_mismatched_passwords() {
        let backend = MemoryAuth::new();
        let nav = RecordingNavigator::new();
        let mut form = filled("a@b.com", "secret1", "secret2");

        form.submit(&backend, &nav).await;

        assert_eq!(form.error_message.as_deref(), Some("Passwords do not match"));
        assert_eq!(form.email, "a@b.com");
        assert_eq!(form.password, "secret1");
        assert_eq!(form.confirm_password, "secret2");
        assert_eq!(backend.create_account_calls(), 0);
        assert!(nav.visits().is_empty());
    }

    #[tokio::test]
    async fn test_empty_email() {
        let backend = MemoryAuth::new();
        let nav = RecordingNavigator::new();
        let mut form = filled("", "x", "x");

        form.submit(&backend, &nav).await;

        assert_eq!(form.error_message.as_deref(), Some("Please input an email"));
        assert_eq!(backend.create_account_calls(), 0);
    }

    #[tokio::test]
    async fn test_empty_password() {
        let backend = MemoryAuth::new();
        let nav = RecordingNavigator::new();

        let mut form = filled("a@b.com", "", "secret1");
        form.submit(&backend, &nav).await;
        assert_eq!(form.error_message.as_deref(), Some("Please input a password"));

        let mut form = filled("a@b.com", "secret1", "");
        form.submit(&backend, &nav).await;
        assert_eq!(form.error_message.as_deref(), Some("Please input a password"));

        assert_eq!(backend.create_account_calls(), 0);
    }

    #[tokio::test]
    async fn test_success_navigates_once() {
        let backend = MemoryAuth::new();
        let nav = RecordingNavigator::new();
        let mut form = filled("a@b.com", "secret1", "secret1");

        form.submit(&backend, &nav).await;

        assert!(form.error_message.is_none());
        assert_eq!(nav.visits(), vec!["/".to_string()]);
        assert_eq!(backend.create_account_calls(), 1);
        assert_eq!(
            backend.auth_state().borrow().as_ref().map(|s| s.email.as_str()),
            Some("a@b.com")
        );
    }

    #[tokio::test]
    async fn test_known_provider_code() {
        let backend = MemoryAuth::new();
        backend.create_account("a@b.com", "secret1").await.unwrap();
        let nav = RecordingNavigator::new();
        let mut form = filled("a@b.com", "secret1", "secret1");

        form.submit(&backend, &nav).await;

        let message = form.error_message.clone().unwrap();
        assert_eq!(message, "This email is already in use");
        assert_ne!(message, DEFAULT_ERROR_MESSAGE);
        assert!(nav.visits().is_empty());
        assert_eq!(backend.create_account_calls(), 2);
    }

    #[tokio::test]
    async fn test_unknown_provider_code() {
        let backend = MemoryAuth::new();
        backend.fail_next(ProviderError::from_code("auth/quota-exceeded"));
        let nav = RecordingNavigator::new();
        let mut form = filled("a@b.com", "secret1", "secret1");

        form.submit(&backend, &nav).await;

        assert_eq!(form.error_message.as_deref(), Some(DEFAULT_ERROR_MESSAGE));
        assert!(nav.visits().is_empty());
    }

    #[tokio::test]
    async fn test_error_cleared_by_next_attempt() {
        let backend = MemoryAuth::new();
        backend.fail_next(ProviderError::from_code(codes::NETWORK_REQUEST_FAILED));
        let nav = RecordingNavigator::new();
        let mut form = filled("a@b.com", "secret1", "secret1");

        form.submit(&backend, &nav).await;
        assert!(form.error_message.is_some());

        form.submit(&backend, &nav).await;
        assert!(form.error_message.is_none());
        assert_eq!(nav.visits(), vec!["/".to_string()]);
    }

    #[tokio::test]
    async fn test_submit_returns_typed_error() {
        let backend = MemoryAuth::new();
        let nav = RecordingNavigator::new();
        let credentials = Credentials {
            email: "a@b.com".to_string(),
            password: "abc".to_string(),
            confirm_password: "abc".to_string(),
        };

        let err = submit(&credentials, &backend, &nav).await.unwrap_err();
        match err {
            RegisterError::Provider(e) => assert_eq!(e.code(), codes::WEAK_PASSWORD),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
