//! Markdown editor with a rendered preview tab

use dioxus::prelude::*;

use marknote_core::markdown::MarkdownRenderer;

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum EditorTab {
    #[default]
    Write,
    Preview,
}

/// Controlled editor over a note body.
///
/// Holds no note data: `value` comes from the workspace and every keystroke
/// goes back through `on_change`.
#[component]
pub fn NoteEditor(value: String, on_change: EventHandler<String>) -> Element {
    let state = use_context::<AppState>();
    let mut tab = use_signal(EditorTab::default);

    let preview_html = if tab() == EditorTab::Preview {
        state.renderer.read().render(&value)
    } else {
        String::new()
    };

    rsx! {
        section {
            class: "pane editor",

            div {
                class: "editor-tabs",
                for (label, target) in [("Write", EditorTab::Write), ("Preview", EditorTab::Preview)] {
                    button {
                        class: if tab() == target { "editor-tab selected" } else { "editor-tab" },
                        onclick: move |_| tab.set(target),
                        "{label}"
                    }
                }
            }

            if tab() == EditorTab::Write {
                textarea {
                    class: "editor-input",
                    style: "min-height: 80vh;",
                    spellcheck: false,
                    value: "{value}",
                    oninput: move |evt: FormEvent| on_change.call(evt.value()),
                }
            } else {
                div {
                    class: "editor-preview",
                    style: "min-height: 80vh;",
                    dangerous_inner_html: "{preview_html}",
                }
            }
        }
    }
}
