//! Per-tile menu and drag flags

use crate::clipboard::Clipboard;
use crate::drag::DragTransport;
use crate::error::Result;
use crate::models::{Folder, FolderId, Note};
use crate::store::Library;

/// Transient state owned by one note tile
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoteTileState {
    pub menu_open: bool,
    pub move_menu_open: bool,
    pub dragging: bool,
}

impl NoteTileState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            menu_open: false,
            move_menu_open: false,
            dragging: false,
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        if !self.menu_open {
            self.move_menu_open = false;
        }
    }

    pub fn toggle_move_menu(&mut self) {
        self.move_menu_open = !self.move_menu_open;
    }

    pub fn close_menus(&mut self) {
        self.menu_open = false;
        self.move_menu_open = false;
    }

    /// Copy the note's summary and close the menu
    pub fn copy(&mut self, note: &Note, clipboard: &mut impl Clipboard) {
        clipboard.copy_to_clipboard(&note.summary);
        tracing::debug!("Copied summary of note {}", note.id);
        self.menu_open = false;
    }

    /// Delete the note and close the menu
    pub fn delete(&mut self, note: &Note, library: &mut Library) {
        library.delete_note(&note.id);
        self.close_menus();
    }

    /// Move the note to `folder` and close both menus
    pub fn move_to(
        &mut self,
        note: &Note,
        folder: FolderId,
        library: &mut Library,
    ) -> Result<()> {
        self.close_menus();
        library.move_note(&note.id, folder)?;
        Ok(())
    }

    /// Start dragging the tile's note
    pub fn drag_start(&mut self, note: &Note, transport: &mut DragTransport) {
        self.dragging = true;
        transport.begin(note.id.as_str());
    }

    pub fn drag_end(&mut self) {
        self.dragging = false;
    }
}

/// Folders offered in the move submenu: everything but the note's own folder
pub fn move_targets<'a>(
    note: &'a Note,
    folders: &'a [Folder],
) -> impl Iterator<Item = &'a Folder> {
    folders.iter().filter(move |folder| folder.id != note.folder)
}
