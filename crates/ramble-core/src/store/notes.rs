//! In-memory note store

use crate::models::{FolderId, Note, NoteId, NotePatch};

/// Ordered list of notes, most recently created first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteStore {
    notes: Vec<Note>,
}

impl NoteStore {
    #[must_use]
    pub const fn new() -> Self {
        Self { notes: Vec::new() }
    }

    /// Notes in `folder`, newest first
    pub fn list<'a>(&'a self, folder: &'a FolderId) -> impl Iterator<Item = &'a Note> + 'a {
        self.notes.iter().filter(move |note| &note.folder == folder)
    }

    /// All notes, newest first
    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.notes.iter()
    }

    #[must_use]
    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| &note.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Number of notes in `folder`
    #[must_use]
    pub fn count_in(&self, folder: &FolderId) -> usize {
        self.list(folder).count()
    }

    /// Create a note and put it at the front of the store.
    pub fn create(
        &mut self,
        title: impl Into<String>,
        summary: impl Into<String>,
        transcript: impl Into<String>,
        folder: FolderId,
    ) -> &Note {
        let note = Note::new(title, summary, transcript, folder);
        tracing::debug!("Created note {} in folder {}", note.id, note.folder);
        self.notes.insert(0, note);
        &self.notes[0]
    }

    /// Apply `patch` to the note with `id`.
    ///
    /// Returns `false` when no such note exists; the store is left untouched.
    pub fn update(&mut self, id: &NoteId, patch: NotePatch) -> bool {
        let Some(note) = self.notes.iter_mut().find(|note| &note.id == id) else {
            tracing::debug!("Ignoring update for missing note {}", id);
            return false;
        };
        if note.apply(patch) {
            tracing::debug!("Updated note {}", id);
        }
        true
    }

    /// Reassign the note to `folder`. Same absent-id semantics as [`Self::update`].
    pub fn move_to(&mut self, id: &NoteId, folder: FolderId) -> bool {
        self.update(id, NotePatch::folder(folder))
    }

    /// Remove and return the note, or `None` if it was not present.
    pub fn delete(&mut self, id: &NoteId) -> Option<Note> {
        let index = self.notes.iter().position(|note| &note.id == id)?;
        let note = self.notes.remove(index);
        tracing::debug!("Deleted note {}", id);
        Some(note)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn home() -> FolderId {
        FolderId::from("home")
    }

    fn think() -> FolderId {
        FolderId::from("think")
    }

    #[test]
    fn create_prepends() {
        let mut store = NoteStore::new();
        let first = store.create("First", "s", "t", home()).id;
        let second = store.create("Second", "s", "t", home()).id;

        let ids: Vec<NoteId> = store.list(&home()).map(|note| note.id).collect();
        assert_eq!(ids, vec![second, first]);
    }

    #[test]
    fn create_only_counts_in_target_folder() {
        let mut store = NoteStore::new();
        store.create("a", "s", "t", think());
        let home_before = store.count_in(&home());
        let think_before = store.count_in(&think());

        store.create("b", "s", "t", home());

        assert_eq!(store.count_in(&home()), home_before + 1);
        assert_eq!(store.count_in(&think()), think_before);
    }

    #[test]
    fn update_missing_note_is_noop() {
        let mut store = NoteStore::new();
        store.create("a", "s", "t", home());
        let before = store.clone();

        assert!(!store.update(&NoteId::new(), NotePatch::text("x", "y")));
        assert_eq!(store, before);
    }

    #[test]
    fn update_keeps_transcript() {
        let mut store = NoteStore::new();
        let id = store.create("a", "s", "t", home()).id;

        assert!(store.update(&id, NotePatch::text("Title", "Summary")));
        let note = store.get(&id).unwrap();
        assert_eq!(note.title, "Title");
        assert_eq!(note.summary, "Summary");
        assert_eq!(note.transcript, "t");
    }

    #[test]
    fn move_changes_listing() {
        let mut store = NoteStore::new();
        let id = store.create("a", "s", "t", home()).id;

        assert!(store.move_to(&id, think()));
        assert!(store.list(&think()).any(|note| note.id == id));
        assert!(!store.list(&home()).any(|note| note.id == id));
    }

    #[test]
    fn delete_removes_everywhere() {
        let mut store = NoteStore::new();
        let id = store.create("a", "s", "t", home()).id;
        store.create("b", "s", "t", think());

        assert!(store.delete(&id).is_some());
        assert!(store.iter().all(|note| note.id != id));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn delete_missing_note_is_noop() {
        let mut store = NoteStore::new();
        store.create("a", "s", "t", home());
        let before = store.clone();

        assert!(store.delete(&NoteId::new()).is_none());
        assert_eq!(store, before);
    }
}
