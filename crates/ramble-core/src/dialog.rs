//! Create-folder dialog state

use crate::error::Result;
use crate::models::{Folder, FolderGlyph};
use crate::store::Library;

/// Modal for naming a new folder and picking its glyph
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateFolderDialog {
    pub open: bool,
    pub name: String,
    pub glyph: FolderGlyph,
}

impl CreateFolderDialog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Hide the dialog and forget what was typed
    pub fn close(&mut self) {
        *self = Self::default();
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn select_glyph(&mut self, glyph: FolderGlyph) {
        self.glyph = glyph;
    }

    /// The create button is enabled only for a non-blank name
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Create the folder.
    ///
    /// Returns `Ok(None)` without touching the library while the name is
    /// blank. A rejected name (already taken) leaves the dialog open with
    /// the input intact.
    pub fn submit(&mut self, library: &mut Library) -> Result<Option<Folder>> {
        if !self.can_submit() {
            return Ok(None);
        }
        let folder = library.create_folder(&self.name, self.glyph)?;
        self.close();
        Ok(Some(folder))
    }
}
