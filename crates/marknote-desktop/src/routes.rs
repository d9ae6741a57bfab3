//! Application routes

use dioxus::prelude::*;

use crate::views::{Login, Notes, Register, Shell};

#[derive(Debug, Clone, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Notes {},
        #[route("/register")]
        Register {},
        #[route("/login")]
        Login {},
}
