//! Registration view

use dioxus::prelude::*;

use marknote_core::config::AppConfig;
use marknote_core::notification::Toast;
use marknote_core::registration::{send_registration, Field, RegistrationForm, FAILURE_MESSAGE};

use crate::routes::Route;
use crate::state::AppState;

/// Heading letters and their colours
const HEADING: [(&str, &str); 8] = [
    ("R", "inherit"),
    ("E", "red"),
    ("G", "blue"),
    ("I", "green"),
    ("S", "yellow"),
    ("T", "pink"),
    ("E", "orange"),
    ("R", "#39ff14"),
];

#[component]
pub fn Register() -> Element {
    let mut state = use_context::<AppState>();
    let config = use_context::<AppConfig>();
    let navigator = use_navigator();
    let mut form = use_signal(RegistrationForm::new);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let payload = match form.read().check() {
            Ok(payload) => payload,
            Err(e) => {
                tracing::debug!("Registration blocked: {}", e);
                state.push_toast(Toast::error(e.to_string()));
                return;
            }
        };

        let Some(client) = state.registration_client.read().clone() else {
            tracing::error!("Registration client is unavailable");
            state.push_toast(Toast::error(FAILURE_MESSAGE));
            return;
        };

        let redirect_delay = config.redirect_delay;
        // Runs on the root scope so leaving /register never drops the request
        spawn_forever(async move {
            let outcome = send_registration(client.as_ref(), &payload).await;
            if let Ok(mut form) = form.try_write() {
                form.finish(&outcome);
            }
            state.push_toast(outcome.toast());

            if outcome.redirects_to_login() {
                tokio::time::sleep(redirect_delay).await;
                navigator.push(Route::Login {});
            }
        });
    };

    rsx! {
        main {
            div {
                class: "container register",
                h1 {
                    for (letter, colour) in HEADING {
                        span { style: "color: {colour};", "{letter} " }
                    }
                }
                hr {}

                form {
                    onsubmit: on_submit,

                    for field in Field::ALL {
                        FieldInput {
                            field,
                            value: form.read().value(field).to_string(),
                            error: form.read().error_for(field),
                            on_input: move |value: String| form.write().set_field(field, value),
                        }
                    }

                    div {
                        button { r#type: "submit", class: "btn btn-primary", "Register" }
                    }
                }
            }
        }
    }
}

/// Labelled input with its inline error beneath
#[component]
fn FieldInput(
    field: Field,
    value: String,
    #[props(!optional)]
    error: Option<&'static str>,
    on_input: EventHandler<String>,
) -> Element {
    let label_text = field.label();
    let id = field.id();

    rsx! {
        div {
            class: "form-group",
            label { r#for: "{id}", class: "title", "{label_text}" }
            input {
                r#type: field.input_type(),
                class: "form-control",
                id: "{id}",
                value: "{value}",
                oninput: move |evt: FormEvent| on_input.call(evt.value()),
            }
        }
        if let Some(message) = error {
            div { class: "error", "{message}" }
        }
    }
}
