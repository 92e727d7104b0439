//! Registration page view.

use dioxus::prelude::*;
use ui::RegisterScreen;

/// Register page component.
#[component]
pub fn Register() -> Element {
    rsx! {
        RegisterScreen {}
    }
}
