//! Data models for Marknote

mod note;

pub use note::{Note, NoteId, PLACEHOLDER_BODY};
