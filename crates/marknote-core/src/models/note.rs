//! Note model

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Body given to every freshly created note.
pub const PLACEHOLDER_BODY: &str = "# Type your markdown note's title here";

/// Opaque unique identifier for a note.
///
/// Stored notes may carry ids minted by other clients, so any string is
/// accepted on load. New ids are UUID v7 rendered without hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// Mint a fresh unique id
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7().simple().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NoteId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for NoteId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A markdown note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier
    pub id: NoteId,
    /// Markdown source; its first line doubles as the title
    pub body: String,
}

impl Note {
    /// Create a note with a fresh id and the given body
    #[must_use]
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            id: NoteId::new(),
            body: body.into(),
        }
    }

    /// Create a note with the placeholder body
    #[must_use]
    pub fn placeholder() -> Self {
        Self::new(PLACEHOLDER_BODY)
    }

    /// First line of the body, used as the display title
    #[must_use]
    pub fn title(&self) -> &str {
        self.body.split('\n').next().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_id_unique() {
        let id1 = NoteId::new();
        let id2 = NoteId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_note_id_serializes_as_plain_string() {
        let id = NoteId::from("V1StGXR8_Z5jdHi6B-myT");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"V1StGXR8_Z5jdHi6B-myT\"");
    }

    #[test]
    fn test_placeholder_note() {
        let note = Note::placeholder();
        assert_eq!(note.body, PLACEHOLDER_BODY);
        assert!(!note.id.as_str().is_empty());
    }

    #[test]
    fn test_title_is_first_line() {
        let note = Note::new("# Groceries\n- milk\n- eggs");
        assert_eq!(note.title(), "# Groceries");
    }

    #[test]
    fn test_title_of_empty_body() {
        let note = Note::new("");
        assert_eq!(note.title(), "");
    }

    #[test]
    fn test_title_of_single_line() {
        let note = Note::new("single line");
        assert_eq!(note.title(), "single line");
    }
}
