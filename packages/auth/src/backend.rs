//! Provider contract shared by every backend.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::error::ProviderError;

/// The signed-in user as reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub uid: String,
    pub email: String,
}

/// An identity service that can create accounts and report the current session.
pub trait AuthBackend {
    /// Create an account for `email`/`password`.
    ///
    /// On success the new session is also published on [`auth_state`](Self::auth_state).
    async fn create_account(&self, email: &str, password: &str)
        -> Result<Session, ProviderError>;

    /// Subscribe to session changes.
    ///
    /// The returned receiver sees the current value immediately. Dropping it ends
    /// the subscription.
    fn auth_state(&self) -> watch::Receiver<Option<Session>>;
}
