//! Layout shared by every route

use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn Shell() -> Element {
    rsx! {
        nav {
            class: "app-nav",
            Link { to: Route::Notes {}, "Notes" }
            Link { to: Route::Register {}, "Register" }
        }
        Outlet::<Route> {}
    }
}
