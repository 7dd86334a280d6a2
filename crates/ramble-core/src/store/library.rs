//! The single owner of notes and folders

use crate::error::{Error, Result};
use crate::models::{Folder, FolderGlyph, FolderId, Note, NoteId, NotePatch};

use super::{FolderRegistry, NoteStore};

/// Authoritative note and folder lists.
///
/// Every note's folder refers to a registered folder: notes can only be
/// created in or moved to folders the registry knows, and folders are never
/// removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Library {
    folders: FolderRegistry,
    notes: NoteStore,
}

impl Library {
    /// Empty library with the built-in folders
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn folders(&self) -> &FolderRegistry {
        &self.folders
    }

    #[must_use]
    pub const fn notes(&self) -> &NoteStore {
        &self.notes
    }

    pub fn create_folder(&mut self, name: &str, glyph: FolderGlyph) -> Result<Folder> {
        self.folders.create(name, glyph).cloned()
    }

    /// Create a note in `folder`, which must exist.
    pub fn create_note(
        &mut self,
        title: impl Into<String>,
        summary: impl Into<String>,
        transcript: impl Into<String>,
        folder: FolderId,
    ) -> Result<NoteId> {
        self.ensure_folder(&folder)?;
        Ok(self.notes.create(title, summary, transcript, folder).id)
    }

    /// Create a note in the default folder
    pub fn create_note_in_default(
        &mut self,
        title: impl Into<String>,
        summary: impl Into<String>,
        transcript: impl Into<String>,
    ) -> NoteId {
        let folder = self.folders.default_folder().id.clone();
        self.notes.create(title, summary, transcript, folder).id
    }

    /// Update a note. A patch that names an unknown folder is rejected before
    /// anything changes; a missing note is a no-op returning `Ok(false)`.
    pub fn update_note(&mut self, id: &NoteId, patch: NotePatch) -> Result<bool> {
        if let Some(folder) = &patch.folder {
            self.ensure_folder(folder)?;
        }
        Ok(self.notes.update(id, patch))
    }

    /// Reassign a note to `folder`, which must exist.
    pub fn move_note(&mut self, id: &NoteId, folder: FolderId) -> Result<bool> {
        self.update_note(id, NotePatch::folder(folder))
    }

    pub fn delete_note(&mut self, id: &NoteId) -> Option<Note> {
        self.notes.delete(id)
    }

    fn ensure_folder(&self, folder: &FolderId) -> Result<()> {
        if self.folders.contains(folder) {
            Ok(())
        } else {
            Err(Error::UnknownFolder(folder.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folder(id: &str) -> FolderId {
        FolderId::from(id)
    }

    fn all_notes_in_known_folders(library: &Library) -> bool {
        library
            .notes()
            .iter()
            .all(|note| library.folders().contains(&note.folder))
    }

    #[test]
    fn create_note_rejects_unknown_folder() {
        let mut library = Library::new();
        let err = library
            .create_note("t", "s", "x", folder("nowhere"))
            .unwrap_err();
        assert!(matches!(err, Error::UnknownFolder(_)));
        assert!(library.notes().is_empty());
    }

    #[test]
    fn default_folder_is_home() {
        let mut library = Library::new();
        let id = library.create_note_in_default("t", "s", "x");
        assert_eq!(library.notes().get(&id).unwrap().folder, folder("home"));
    }

    #[test]
    fn move_to_unknown_folder_leaves_note_in_place() {
        let mut library = Library::new();
        let id = library.create_note("t", "s", "x", folder("ycp")).unwrap();

        let err = library.move_note(&id, folder("nowhere")).unwrap_err();
        assert!(matches!(err, Error::UnknownFolder(_)));
        assert_eq!(library.notes().get(&id).unwrap().folder, folder("ycp"));
        assert!(all_notes_in_known_folders(&library));
    }

    #[test]
    fn move_into_user_folder() {
        let mut library = Library::new();
        let created = library
            .create_folder("Deep Work", FolderGlyph::Brain)
            .unwrap();
        let id = library.create_note_in_default("t", "s", "x");

        assert!(library.move_note(&id, created.id.clone()).unwrap());
        assert_eq!(library.notes().count_in(&created.id), 1);
        assert!(all_notes_in_known_folders(&library));
    }

    #[test]
    fn missing_note_operations_are_noops() {
        let mut library = Library::new();
        library.create_note_in_default("t", "s", "x");
        let before = library.clone();
        let ghost = NoteId::new();

        assert!(!library.move_note(&ghost, folder("think")).unwrap());
        assert!(!library.update_note(&ghost, NotePatch::text("a", "b")).unwrap());
        assert!(library.delete_note(&ghost).is_none());
        assert_eq!(library, before);
    }
}
