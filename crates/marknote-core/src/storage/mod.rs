//! Persistence for the note collection.
//!
//! The whole collection lives under a single key as one JSON array of
//! `{ "id", "body" }` objects. It is read once at startup and overwritten
//! wholesale after every mutation.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use crate::error::Result;
use crate::models::Note;

/// Fixed key the note collection is stored under.
pub const STORAGE_KEY: &str = "notes";

/// Trait for note collection persistence
pub trait NoteStore {
    /// Read the raw blob stored under [`STORAGE_KEY`], if any
    fn read_blob(&self) -> Result<Option<String>>;

    /// Overwrite the blob stored under [`STORAGE_KEY`]
    fn write_blob(&self, blob: &str) -> Result<()>;

    /// Load the stored collection.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> Result<Option<Vec<Note>>> {
        match self.read_blob()? {
            Some(blob) => Ok(Some(decode_notes(&blob)?)),
            None => Ok(None),
        }
    }

    /// Replace the stored collection with `notes`
    fn save(&self, notes: &[Note]) -> Result<()> {
        self.write_blob(&encode_notes(notes)?)
    }
}

/// Serialize a collection into the stored blob format
pub fn encode_notes(notes: &[Note]) -> Result<String> {
    Ok(serde_json::to_string(notes)?)
}

/// Parse a stored blob.
///
/// A literal `null` blob is treated as an empty collection.
pub fn decode_notes(blob: &str) -> Result<Vec<Note>> {
    let notes: Option<Vec<Note>> = serde_json::from_str(blob)?;
    Ok(notes.unwrap_or_default())
}
