//! Login placeholder - the redirect target after registering

use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn Login() -> Element {
    rsx! {
        main {
            div {
                class: "container login",
                h1 { "Log in" }
                hr {}
                p { "Your account is ready. Sign in with your new credentials." }
                div {
                    class: "login-links",
                    Link { to: Route::Notes {}, "Go to your notes" }
                    Link { to: Route::Register {}, "Register another account" }
                }
            }
        }
    }
}
