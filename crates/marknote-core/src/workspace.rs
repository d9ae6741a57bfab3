//! Notes workspace state container
//!
//! [`NotesWorkspace`] is the single writer of the note collection. Every
//! mutating operation updates memory first and then persists the whole
//! collection through its [`NoteStore`].

use crate::error::Result;
use crate::models::{Note, NoteId};
use crate::storage::NoteStore;

/// Resolve the note to display.
///
/// Returns the note whose id equals `selected`. When `selected` is `None` or
/// stale, falls back to the first note. Returns `None` only for an empty
/// collection.
#[must_use]
pub fn resolve<'a>(notes: &'a [Note], selected: Option<&NoteId>) -> Option<&'a Note> {
    selected
        .and_then(|id| notes.iter().find(|note| &note.id == id))
        .or_else(|| notes.first())
}

/// Ordered note collection plus the current selection.
#[derive(Debug)]
pub struct NotesWorkspace<S: NoteStore> {
    notes: Vec<Note>,
    selected: Option<NoteId>,
    store: S,
}

impl<S: NoteStore> NotesWorkspace<S> {
    /// Restore the workspace from `store`.
    ///
    /// A missing or unreadable blob starts an empty workspace. The initial
    /// selection is the first stored note.
    pub fn load(store: S) -> Self {
        let notes = match store.load() {
            Ok(Some(notes)) => notes,
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("Discarding unreadable note storage: {}", e);
                Vec::new()
            }
        };
        tracing::info!("Loaded {} notes", notes.len());

        let selected = notes.first().map(|note| note.id.clone());
        Self {
            notes,
            selected,
            store,
        }
    }

    #[must_use]
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Raw selection id, which may be stale
    #[must_use]
    pub const fn selected_id(&self) -> Option<&NoteId> {
        self.selected.as_ref()
    }

    /// Insert a placeholder note at the front and select it.
    ///
    /// The note is always created in memory. The returned error only reports
    /// that persisting the collection failed.
    pub fn create_note(&mut self) -> Result<NoteId> {
        let note = Note::placeholder();
        let id = note.id.clone();
        tracing::info!("Created new note: {}", id);

        self.notes.insert(0, note);
        self.selected = Some(id.clone());
        self.persist()?;
        Ok(id)
    }

    /// Replace the body of the selected note.
    ///
    /// Only the note whose id equals the raw selection is touched. If the
    /// selection matches nothing the collection is unchanged and nothing is
    /// written.
    pub fn update_note(&mut self, body: impl Into<String>) -> Result<()> {
        let Some(selected) = self.selected.as_ref() else {
            return Ok(());
        };
        let Some(note) = self.notes.iter_mut().find(|note| &note.id == selected) else {
            tracing::debug!("Ignoring edit for unknown note {}", selected);
            return Ok(());
        };

        note.body = body.into();
        self.persist()
    }

    /// Select a note by id without checking that it exists
    pub fn select_note(&mut self, id: NoteId) {
        self.selected = Some(id);
    }

    /// The note to display, see [`resolve`]
    #[must_use]
    pub fn resolve_current(&self) -> Option<&Note> {
        resolve(&self.notes, self.selected.as_ref())
    }

    fn persist(&self) -> Result<()> {
        self.store.save(&self.notes).map_err(|e| {
            tracing::error!("Failed to save notes: {}", e);
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::Error;
    use crate::models::PLACEHOLDER_BODY;
    use crate::storage::MemoryStore;

    fn note(id: &str, body: &str) -> Note {
        Note {
            id: id.into(),
            body: body.to_string(),
        }
    }

    fn seeded(notes: &[Note]) -> (NotesWorkspace<MemoryStore>, MemoryStore) {
        let store = MemoryStore::new();
        store.save(notes).unwrap();
        let observer = store.clone();
        (NotesWorkspace::load(store), observer)
    }

    #[derive(Debug)]
    struct FailingStore;

    impl NoteStore for FailingStore {
        fn read_blob(&self) -> Result<Option<String>> {
            Ok(None)
        }

        fn write_blob(&self, _blob: &str) -> Result<()> {
            Err(Error::InvalidInput("disk full".to_string()))
        }
    }

    #[test]
    fn resolve_prefers_selected_note() {
        let notes = vec![note("a", "A"), note("b", "B")];
        let selected = NoteId::from("b");
        assert_eq!(resolve(&notes, Some(&selected)).unwrap().body, "B");
    }

    #[test]
    fn resolve_falls_back_to_first_note() {
        let notes = vec![note("a", "A"), note("b", "B")];
        let stale = NoteId::from("gone");
        assert_eq!(resolve(&notes, Some(&stale)).unwrap().id.as_str(), "a");
        assert_eq!(resolve(&notes, None).unwrap().id.as_str(), "a");
    }

    #[test]
    fn resolve_empty_collection_is_none() {
        assert!(resolve(&[], None).is_none());
        assert!(resolve(&[], Some(&NoteId::from("a"))).is_none());
    }

    #[test]
    fn load_selects_first_stored_note() {
        let (workspace, _) = seeded(&[note("a", "A"), note("b", "B")]);
        assert_eq!(workspace.selected_id(), Some(&NoteId::from("a")));
    }

    #[test]
    fn load_corrupt_blob_starts_empty() {
        let workspace = NotesWorkspace::load(MemoryStore::with_blob("not json"));
        assert!(workspace.is_empty());
        assert!(workspace.resolve_current().is_none());
    }

    #[test]
    fn create_note_prepends_and_selects() {
        let existing = vec![note("a", "A"), note("b", "B")];
        let (mut workspace, _) = seeded(&existing);

        let id = workspace.create_note().unwrap();

        assert_eq!(workspace.notes().len(), 3);
        assert_eq!(workspace.notes()[0].id, id);
        assert_eq!(workspace.notes()[0].body, PLACEHOLDER_BODY);
        assert_eq!(&workspace.notes()[1..], existing.as_slice());
        assert_eq!(workspace.selected_id(), Some(&id));
        assert_eq!(workspace.resolve_current().unwrap().id, id);
    }

    #[test]
    fn create_first_note_is_persisted() {
        let store = MemoryStore::new();
        let observer = store.clone();
        let mut workspace = NotesWorkspace::load(store);
        assert!(workspace.resolve_current().is_none());

        let id = workspace.create_note().unwrap();

        let stored = observer.load().unwrap().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, id);
        assert_eq!(stored[0].title(), PLACEHOLDER_BODY);
        assert_eq!(workspace.resolve_current(), Some(&stored[0]));
    }

    #[test]
    fn update_note_only_touches_selection() {
        let (mut workspace, observer) = seeded(&[note("a", "A"), note("b", "B"), note("c", "C")]);
        workspace.select_note("b".into());

        workspace.update_note("# B edited").unwrap();

        assert_eq!(
            workspace.notes(),
            &[note("a", "A"), note("b", "# B edited"), note("c", "C")]
        );
        assert_eq!(observer.load().unwrap().unwrap(), workspace.notes());
    }

    #[test]
    fn update_with_stale_selection_changes_nothing() {
        let (mut workspace, observer) = seeded(&[note("a", "A")]);
        let writes_before = observer.write_count();
        workspace.select_note("missing".into());

        workspace.update_note("lost edit").unwrap();

        assert_eq!(workspace.notes(), &[note("a", "A")]);
        assert_eq!(observer.write_count(), writes_before);
        // Display still falls back to the first note
        assert_eq!(workspace.resolve_current().unwrap().id.as_str(), "a");
    }

    #[test]
    fn every_mutation_saves_once() {
        let (mut workspace, observer) = seeded(&[]);
        let base = observer.write_count();

        workspace.create_note().unwrap();
        workspace.update_note("one").unwrap();
        workspace.update_note("two").unwrap();

        assert_eq!(observer.write_count(), base + 3);
    }

    #[test]
    fn select_note_does_not_persist() {
        let (mut workspace, observer) = seeded(&[note("a", "A"), note("b", "B")]);
        let writes_before = observer.write_count();

        workspace.select_note("b".into());

        assert_eq!(observer.write_count(), writes_before);
        assert_eq!(workspace.resolve_current().unwrap().body, "B");
    }

    #[test]
    fn failed_save_keeps_in_memory_change() {
        let mut workspace = NotesWorkspace::load(FailingStore);

        assert!(workspace.create_note().is_err());
        assert_eq!(workspace.notes().len(), 1);
        assert!(workspace.resolve_current().is_some());
    }
}
