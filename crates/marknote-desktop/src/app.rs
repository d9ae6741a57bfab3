//! Main application component

use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;

use marknote_core::config::AppConfig;
use marknote_core::markdown::{GfmRenderer, MarkdownRenderer};
use marknote_core::notification::ToastQueue;
use marknote_core::registration::HttpRegistrationClient;
use marknote_core::storage::JsonFileStore;
use marknote_core::NotesWorkspace;

use crate::components::ToastContainer;
use crate::routes::Route;
use crate::state::AppState;

/// Root application component
#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();

    // Read the note blob once at startup
    let workspace = use_signal(|| NotesWorkspace::load(JsonFileStore::new(&config.data_dir)));
    let renderer = use_signal(|| Rc::new(GfmRenderer::new()) as Rc<dyn MarkdownRenderer>);
    let registration_client = use_signal(|| {
        match HttpRegistrationClient::new(config.register_endpoint.clone()) {
            Ok(client) => Some(Arc::new(client)),
            Err(e) => {
                tracing::error!("Failed to initialize registration client: {}", e);
                None
            }
        }
    });
    let toasts = use_signal(ToastQueue::new);

    use_context_provider(|| AppState {
        workspace,
        renderer,
        registration_client,
        toasts,
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/app.css") }

        Router::<Route> {}
        ToastContainer {}
    }
}
