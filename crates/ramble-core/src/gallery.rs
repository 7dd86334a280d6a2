//! Folder selection for the note gallery

use crate::models::{FolderId, Note};
use crate::store::{Library, DEFAULT_FOLDER};

/// Hint shown under the empty-folder message
pub const EMPTY_FOLDER_HINT: &str = "Record your first note or move some from other folders";

/// Which folder the gallery is showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    selected: FolderId,
}

impl Default for Gallery {
    fn default() -> Self {
        Self {
            selected: FolderId::from(DEFAULT_FOLDER),
        }
    }
}

impl Gallery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn selected(&self) -> &FolderId {
        &self.selected
    }

    pub fn select(&mut self, folder: FolderId) {
        self.selected = folder;
    }

    /// Notes in the selected folder, newest first
    #[must_use]
    pub fn visible_notes<'a>(&'a self, library: &'a Library) -> Vec<&'a Note> {
        library.notes().list(&self.selected).collect()
    }

    /// Page heading: the selected folder's name
    #[must_use]
    pub fn heading(&self, library: &Library) -> String {
        library
            .folders()
            .get(&self.selected)
            .map_or_else(|| "Notes".to_string(), |folder| folder.name.clone())
    }

    /// Message shown when the selected folder has no notes
    #[must_use]
    pub fn empty_message(&self, library: &Library) -> String {
        format!("No notes in {}", self.heading(library))
    }
}
