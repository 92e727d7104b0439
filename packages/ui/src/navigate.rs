//! Router seam used by screens that navigate away on their own.

use dioxus::prelude::*;

/// Something that can move the app to another path.
pub trait Navigate {
    fn navigate(&self, path: &str);
}

impl Navigate for Navigator {
    fn navigate(&self, path: &str) {
        if let Some(failure) = self.push(path.to_string()) {
            tracing::warn!("Navigation to {} failed: {:?}", path, failure);
        }
    }
}

/// Navigator that leaves the current screen at most once.
///
/// A screen can be told to leave by more than one source (a submit handler and a
/// session stream); only the first request is forwarded.
#[derive(Clone, Copy)]
pub struct ScreenNavigator<N = Navigator> {
    nav: N,
    left: Signal<bool>,
}

impl<N: Navigate> Navigate for ScreenNavigator<N> {
    fn navigate(&self, path: &str) {
        let mut left = self.left;
        if *left.peek() {
            tracing::debug!("Already left this screen, ignoring navigation to {}", path);
            return;
        }
        left.set(true);
        self.nav.navigate(path);
    }
}

/// Get a [`ScreenNavigator`] over the router, scoped to the calling component.
pub fn use_screen_navigator() -> ScreenNavigator {
    use_leave_once(use_navigator())
}

/// Wrap `nav` so the calling component navigates away at most once.
pub fn use_leave_once<N: Navigate>(nav: N) -> ScreenNavigator<N> {
    let left = use_signal(|| false);
    ScreenNavigator { nav, left }
}
