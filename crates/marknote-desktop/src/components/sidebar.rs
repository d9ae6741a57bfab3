//! Sidebar component with the note list

use dioxus::prelude::*;

use marknote_core::{Note, NoteId};

/// One row per note, titled by the note's first line
#[component]
pub fn Sidebar(
    notes: Vec<Note>,
    #[props(!optional)]
    current_id: Option<NoteId>,
    on_select: EventHandler<NoteId>,
    on_create: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        section {
            class: "pane sidebar",

            div {
                class: "sidebar--header",
                h3 { "Notes" }
                button {
                    class: "new-note",
                    title: "New note",
                    onclick: move |evt| on_create.call(evt),
                    "+"
                }
            }

            for note in notes {
                {
                    let is_selected = current_id.as_ref() == Some(&note.id);
                    let title = note.title().to_string();
                    let key = note.id.to_string();
                    let note_id = note.id;

                    rsx! {
                        div {
                            key: "{key}",
                            class: if is_selected { "title selected-note" } else { "title" },
                            onclick: move |_| on_select.call(note_id.clone()),
                            h4 { class: "text-snippet", "{title}" }
                        }
                    }
                }
            }
        }
    }
}
