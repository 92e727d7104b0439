use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::watch;

use crate::backend::{AuthBackend, Session};
use crate::error::{codes, ProviderError};

const MIN_PASSWORD_LEN: usize = 6;

/// In-process account backend for local runs and tests.
#[derive(Clone, Debug)]
pub struct MemoryAuth {
    accounts: Arc<Mutex<HashMap<String, Session>>>,
    session: Arc<watch::Sender<Option<Session>>>,
    next_failure: Arc<Mutex<Option<ProviderError>>>,
    calls: Arc<Mutex<usize>>,
}

impl Default for MemoryAuth {
    fn default() -> Self {
        let (session, _) = watch::channel(None);
        Self {
            accounts: Arc::default(),
            session: Arc::new(session),
            next_failure: Arc::default(),
            calls: Arc::default(),
        }
    }
}

impl MemoryAuth {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend that already has `session` signed in.
    pub fn with_session(session: Session) -> Self {
        let auth = Self::default();
        auth.accounts
            .lock()
            .unwrap()
            .insert(session.email.to_lowercase(), session.clone());
        auth.session.send_replace(Some(session));
        auth
    }

    /// Make the next `create_account` call reject with `error`.
    pub fn fail_next(&self, error: ProviderError) {
        *self.next_failure.lock().unwrap() = Some(error);
    }

    /// Number of `create_account` calls made so far.
    pub fn create_account_calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }

    /// Clear the current session.
    pub fn sign_out(&self) {
        self.session.send_replace(None);
    }
}

impl AuthBackend for MemoryAuth {
    async fn create_account(&self, email: &str, password: &str) -> Result<Session, ProviderError> {
        *self.calls.lock().unwrap() += 1;

        if let Some(err) = self.next_failure.lock().unwrap().take() {
            return Err(err);
        }
        if !email.contains('@') {
            return Err(ProviderError::from_code(codes::INVALID_EMAIL));
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ProviderError::new(
                codes::WEAK_PASSWORD,
                "Password should be at least 6 characters",
            ));
        }

        let session = {
            let mut accounts = self.accounts.lock().unwrap();
            let key = email.to_lowercase();
            if accounts.contains_key(&key) {
                return Err(ProviderError::from_code(codes::EMAIL_ALREADY_IN_USE));
            }
            let session = Session {
                uid: format!("local-{}", accounts.len() + 1),
                email: email.to_string(),
            };
            accounts.insert(key, session.clone());
            session
        };

        self.session.send_replace(Some(session.clone()));
        Ok(session)
    }

    fn auth_state(&self) -> watch::Receiver<Option<Session>> {
        self.session.subscribe()
    }
}
