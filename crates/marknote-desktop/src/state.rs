//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use std::rc::Rc;
use std::sync::Arc;
use std::time::Instant;

use dioxus::prelude::*;

use marknote_core::markdown::MarkdownRenderer;
use marknote_core::notification::{Toast, ToastQueue};
use marknote_core::registration::HttpRegistrationClient;
use marknote_core::storage::JsonFileStore;
use marknote_core::NotesWorkspace;

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Notes plus selection, mirrored to disk on every change
    pub workspace: Signal<NotesWorkspace<JsonFileStore>>,
    /// Renderer used by the editor preview
    pub renderer: Signal<Rc<dyn MarkdownRenderer>>,
    /// Registration API client, if the endpoint was usable
    pub registration_client: Signal<Option<Arc<HttpRegistrationClient>>>,
    /// Toasts on screen, swept by the root toast container
    pub toasts: Signal<ToastQueue>,
}

impl AppState {
    /// Show a toast until it expires or is clicked
    pub fn push_toast(&mut self, toast: Toast) {
        self.toasts.write().push(toast, Instant::now());
    }

    /// Remove a toast before it expires
    pub fn dismiss_toast(&mut self, id: u64) {
        self.toasts.write().dismiss(id);
    }

    /// Create a note and select it
    pub fn create_note(&mut self) {
        let result = self.workspace.write().create_note();
        if let Err(e) = result {
            self.push_toast(Toast::error(format!("Could not save notes: {e}")));
        }
    }

    /// Replace the selected note's body
    pub fn update_note(&mut self, body: String) {
        let result = self.workspace.write().update_note(body);
        if let Err(e) = result {
            self.push_toast(Toast::error(format!("Could not save notes: {e}")));
        }
    }
}
