use tokio::sync::watch;

use crate::backend::{AuthBackend, Session};
use crate::config::IdentityConfig;
use crate::error::ProviderError;
use crate::identity::IdentityToolkit;
use crate::memory::MemoryAuth;

/// The backend the app runs against, chosen once at startup.
#[derive(Clone)]
pub enum AuthClient {
    Identity(IdentityToolkit),
    Memory(MemoryAuth),
}

impl AuthClient {
    /// Use the hosted identity service when configured, else keep accounts in memory.
    pub fn from_env() -> Self {
        match IdentityConfig::from_env() {
            Ok(config) => {
                tracing::info!("Using identity service at {}", config.endpoint);
                Self::Identity(IdentityToolkit::new(config))
            }
            Err(e) => {
                tracing::warn!("{}; accounts will only live in memory", e);
                Self::Memory(MemoryAuth::new())
            }
        }
    }
}

impl From<MemoryAuth> for AuthClient {
    fn from(auth: MemoryAuth) -> Self {
        Self::Memory(auth)
    }
}

impl AuthBackend for AuthClient {
    async fn create_account(&self, email: &str, password: &str) -> Result<Session, ProviderError> {
        match self {
            Self::Identity(backend) => backend.create_account(email, password).await,
            Self::Memory(backend) => backend.create_account(email, password).await,
        }
    }

    fn auth_state(&self) -> watch::Receiver<Option<Session>> {
        match self {
            Self::Identity(backend) => backend.auth_state(),
            Self::Memory(backend) => backend.auth_state(),
        }
    }
}
