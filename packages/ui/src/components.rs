//! Form building blocks shared by the screens.

use dioxus::prelude::*;

#[component]
pub fn Button(
    #[props(default, into)] class: String,
    /// Render as a form submit button.
    #[props(default)]
    submit: bool,
    children: Element,
) -> Element {
    let kind = if submit { "submit" } else { "button" };

    rsx! {
        button {
            class: "btn btn-primary {class}",
            r#type: kind,
            {children}
        }
    }
}

/// Labeled text input. `masked` hides the typed characters.
///
/// The asterisk only marks the field as needed; the browser is not asked to
/// enforce it, so an empty value still reaches the form's submit handler.
#[component]
pub fn Input(
    #[props(into)] label: String,
    #[props(default, into)] placeholder: String,
    #[props(default)] masked: bool,
    #[props(into)] value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    let kind = if masked { "password" } else { "text" };

    rsx! {
        label {
            class: "field",
            span {
                class: "field-label",
                "{label}"
                span { class: "field-marker", " *" }
            }
            input {
                class: "field-input",
                r#type: kind,
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |evt| oninput.call(evt),
            }
        }
    }
}
