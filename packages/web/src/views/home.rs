//! Application root.

use dioxus::prelude::*;
use ui::use_auth;

use crate::Route;

#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let email = auth().session.map(|session| session.email);

    rsx! {
        div {
            class: "page",

            div {
                class: "auth-card",

                if let Some(email) = email {
                    h1 {
                        class: "auth-title",
                        "Welcome"
                    }
                    p {
                        class: "auth-subtitle",
                        "Signed in as {email}"
                    }
                } else {
                    p {
                        class: "auth-subtitle",
                        "You are not signed in. "
                        Link {
                            class: "auth-link",
                            to: Route::Register {},
                            "Create an account"
                        }
                    }
                }
            }
        }
    }
}
