//! Notes workspace view - list plus editor

use dioxus::prelude::*;

use crate::components::{NoteEditor, Sidebar, SplitPane};
use crate::state::AppState;

/// Notes workspace screen
#[component]
pub fn Notes() -> Element {
    let mut state = use_context::<AppState>();

    let (notes, current) = {
        let workspace = state.workspace.read();
        (
            workspace.notes().to_vec(),
            workspace.resolve_current().cloned(),
        )
    };

    let Some(current) = current else {
        return rsx! {
            main {
                div {
                    class: "no-notes",
                    h1 { "You have no notes" }
                    button {
                        class: "first-note",
                        onclick: move |_| state.create_note(),
                        "Create one now"
                    }
                }
            }
        };
    };

    // Keyed by note so switching notes resets the editor's tab
    let editor_key = current.id.to_string();

    rsx! {
        main {
            SplitPane {
                left: rsx! {
                    Sidebar {
                        notes,
                        current_id: Some(current.id),
                        on_select: move |id| state.workspace.write().select_note(id),
                        on_create: move |_| state.create_note(),
                    }
                },
                right: rsx! {
                    NoteEditor {
                        key: "{editor_key}",
                        value: current.body,
                        on_change: move |body| state.update_note(body),
                    }
                },
            }
        }
    }
}
