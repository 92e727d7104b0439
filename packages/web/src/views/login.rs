//! Login page view. Signing in with an existing account is not wired up yet,
//! so this only points new users at registration.

use dioxus::prelude::*;

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    rsx! {
        div {
            class: "page",

            div {
                class: "auth-card",

                h1 {
                    class: "auth-title",
                    "Welcome back!"
                }

                p {
                    class: "auth-subtitle",
                    "Don't have an account? "
                    Link {
                        class: "auth-link",
                        to: Route::Register {},
                        "Register"
                    }
                }
            }
        }
    }
}
