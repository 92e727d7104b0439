use auth::AuthBackend;
use dioxus::prelude::*;

use super::form::FormState;
use super::redirect::redirect_when_signed_in;
use super::LOGIN_PATH;
use crate::components::{Button, Input};
use crate::navigate::{use_screen_navigator, Navigate};
use crate::use_auth_client;

/// Registration page component.
#[component]
pub fn RegisterScreen() -> Element {
    let client = use_auth_client();
    let nav = use_navigator();
    let screen_nav = use_screen_navigator();
    let mut form = use_signal(FormState::default);

    // Leave if a session exists or appears; the task ends with this screen
    let sessions_client = client.clone();
    use_future(move || {
        let sessions = sessions_client.auth_state();
        async move {
            redirect_when_signed_in(sessions, &screen_nav).await;
        }
    });

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            // Work on a snapshot so the signal isn't held across the provider call
            let mut attempt = form.peek().clone();
            form.write().error_message = None;
            attempt.submit(&client, &screen_nav).await;
            if let Some(message) = attempt.error_message {
                form.write().error_message = Some(message);
            }
        });
    };

    let go_to_login = move |evt: MouseEvent| {
        evt.prevent_default();
        nav.navigate(LOGIN_PATH);
    };

    rsx! {
        div {
            class: "page",

            div {
                class: "auth-card",

                h1 {
                    class: "auth-title",
                    "Create an account!"
                }

                p {
                    class: "auth-subtitle",
                    "Already have an account? "
                    a {
                        class: "auth-link",
                        href: "#",
                        onclick: go_to_login,
                        "Login"
                    }
                }

                form {
                    onsubmit: handle_register,
                    class: "auth-form",

                    Input {
                        label: "Email",
                        placeholder: "Enter an email",
                        value: form.read().email.clone(),
                        oninput: move |evt: FormEvent| form.write().on_email_change(evt.value()),
                    }

                    Input {
                        label: "Password",
                        placeholder: "Enter a password",
                        masked: true,
                        value: form.read().password.clone(),
                        oninput: move |evt: FormEvent| form.write().on_password_change(evt.value()),
                    }

                    Input {
                        label: "Confirm Password",
                        placeholder: "Retype your password",
                        masked: true,
                        value: form.read().confirm_password.clone(),
                        oninput: move |evt: FormEvent| form.write().on_confirm_password_change(evt.value()),
                    }

                    if let Some(err) = form.read().error_message.clone() {
                        div {
                            class: "form-error",
                            "{err}"
                        }
                    }

                    Button {
                        class: "btn-block",
                        submit: true,
                        "Register"
                    }
                }
            }
        }
    }
}
