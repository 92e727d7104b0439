//! Authentication context and hooks for the UI.

use auth::{AuthBackend, AuthClient, Session};
use dioxus::prelude::*;

/// Authentication state for the application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
}

/// Get the current authentication state.
/// Returns a signal that updates when the provider reports a new session.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Get the backend accounts are created with.
pub fn use_auth_client() -> AuthClient {
    use_context::<AuthClient>()
}

/// Provider component that owns the auth backend.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let client = use_context_provider(AuthClient::from_env);
    let mut auth_state = use_context_provider(|| Signal::new(AuthState::default()));

    // Mirror the provider's session into the shared signal
    use_future(move || {
        let mut sessions = client.auth_state();
        async move {
            loop {
                let session = sessions.borrow_and_update().clone();
                if auth_state.peek().session != session {
                    auth_state.set(AuthState { session });
                }
                if sessions.changed().await.is_err() {
                    break;
                }
            }
        }
    });

    rsx! {
        {children}
    }
}
