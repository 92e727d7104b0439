//! Leave the registration screen when the provider reports a session.

use auth::Session;
use tokio::sync::watch;

use super::ROOT_PATH;
use crate::navigate::Navigate;

/// Wait until `sessions` holds a session, then navigate to the app root.
///
/// A session that already exists counts. Returns `true` if it navigated, `false`
/// if the provider went away first. Runs to completion at most once, so dropping
/// the future releases the subscription.
pub async fn redirect_when_signed_in<N: Navigate>(
    mut sessions: watch::Receiver<Option<Session>>,
    nav: &N,
) -> bool {
    loop {
        let signed_in = sessions.borrow_and_update().is_some();
        if signed_in {
            nav.navigate(ROOT_PATH);
            return true;
        }
        if sessions.changed().await.is_err() {
            return false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingNavigator;
    use auth::{AuthBackend, MemoryAuth};

    fn session() -> Session {
        Session {
            uid: "u1".to_string(),
            email: "a@b.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_existing_session_redirects_immediately() {
        let backend = MemoryAuth::with_session(session());
        let nav = RecordingNavigator::new();

        assert!(redirect_when_signed_in(backend.auth_state(), &nav).await);
        assert_eq!(nav.visits(), vec!["/".to_string()]);
    }

    #[tokio::test]
    async fn test_redirects_when_session_arrives() {
        let (tx, rx) = watch::channel(None);
        let nav = RecordingNavigator::new();

        let (navigated, _) = tokio::join!(redirect_when_signed_in(rx, &nav), async {
            tx.send_replace(None);
            tx.send_replace(Some(session()));
        });

        assert!(navigated);
        assert_eq!(nav.visits(), vec!["/".to_string()]);
    }

    #[tokio::test]
    async fn test_provider_gone_without_session() {
        let (tx, rx) = watch::channel::<Option<Session>>(None);
        let nav = RecordingNavigator::new();

        let (navigated, _) = tokio::join!(redirect_when_signed_in(rx, &nav), async move {
            drop(tx);
        });

        assert!(!navigated);
        assert!(nav.visits().is_empty());
    }

    #[tokio::test]
    async fn test_account_creation_triggers_redirect() {
        let backend = MemoryAuth::new();
        let nav = RecordingNavigator::new();

        let (navigated, created) = tokio::join!(
            redirect_when_signed_in(backend.auth_state(), &nav),
            backend.create_account("a@b.com", "secret1")
        );

        assert!(created.is_ok());
        assert!(navigated);
        assert_eq!(nav.visits(), vec!["/".to_string()]);
    }
}
