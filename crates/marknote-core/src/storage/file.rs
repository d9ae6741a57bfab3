//! File-backed key-value store.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use super::{NoteStore, STORAGE_KEY};
use crate::error::Result;

/// Stores the note blob as `<dir>/notes.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file holding the note blob
    #[must_use]
    pub fn blob_path(&self) -> PathBuf {
        self.dir.join(format!("{STORAGE_KEY}.json"))
    }
}

impl NoteStore for JsonFileStore {
    fn read_blob(&self) -> Result<Option<String>> {
        match fs::read_to_string(self.blob_path()) {
            Ok(raw) => Ok(Some(raw)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    fn write_blob(&self, blob: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;

        // Write beside the target then rename so a crash never leaves half a blob
        let target = self.blob_path();
        let staging = self.dir.join(format!("{STORAGE_KEY}.json.tmp"));
        let written = fs::write(&staging, blob).and_then(|()| fs::rename(&staging, &target));
        if let Err(error) = written {
            if let Err(cleanup) = fs::remove_file(&staging) {
                if cleanup.kind() != ErrorKind::NotFound {
                    tracing::warn!("Failed to remove {}: {}", staging.display(), cleanup);
                }
            }
            return Err(error.into());
        }

        tracing::debug!("Wrote {} bytes to {}", blob.len(), target.display());
        Ok(())
    }
}
