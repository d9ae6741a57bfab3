//! In-memory store, shared between clones.

use std::sync::{Arc, Mutex, PoisonError};

use super::NoteStore;
use crate::error::Result;

/// Keeps the serialized blob in memory.
///
/// Clones share the same slot, so a test can hand one clone to a workspace
/// and inspect what was persisted through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blob: Arc<Mutex<Option<String>>>,
    writes: Arc<Mutex<usize>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a raw blob
    #[must_use]
    pub fn with_blob(blob: impl Into<String>) -> Self {
        let store = Self::default();
        *store.blob.lock().unwrap_or_else(PoisonError::into_inner) = Some(blob.into());
        store
    }

    /// Number of writes performed so far
    #[must_use]
    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl NoteStore for MemoryStore {
    fn read_blob(&self) -> Result<Option<String>> {
        Ok(self
            .blob
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn write_blob(&self, blob: &str) -> Result<()> {
        *self.blob.lock().unwrap_or_else(PoisonError::into_inner) = Some(blob.to_string());
        *self.writes.lock().unwrap_or_else(PoisonError::into_inner) += 1;
        Ok(())
    }
}
