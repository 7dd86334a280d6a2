//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use dioxus::prelude::*;

use ramble_core::card::RecordingCard;
use ramble_core::dialog::CreateFolderDialog;
use ramble_core::drag::DragTransport;
use ramble_core::gallery::Gallery;
use ramble_core::models::{Folder, Note};
use ramble_core::scheduler::TimerQueue;
use ramble_core::Library;

use crate::services::SystemClipboard;
use crate::theme::ResolvedTheme;

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Folders and notes for this session
    pub library: Signal<Library>,
    /// Recording / detail modal
    pub card: Signal<RecordingCard>,
    /// Card timers, advanced by the app loop
    pub timers: Signal<TimerQueue>,
    /// Payload of the note currently being dragged
    pub drag: Signal<DragTransport>,
    /// Folder selection for the notes gallery
    pub gallery: Signal<Gallery>,
    /// Create-folder modal
    pub folder_dialog: Signal<CreateFolderDialog>,
    /// System clipboard
    pub clipboard: Signal<SystemClipboard>,
    /// Resolved theme (light/dark based on settings and system preference)
    pub theme: Signal<ResolvedTheme>,
}

impl AppState {
    /// Notes in the selected folder, newest first
    #[must_use]
    pub fn visible_notes(&self) -> Vec<Note> {
        let library = self.library.read();
        let gallery = self.gallery.read();
        gallery
            .visible_notes(&library)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Folders in dock order, with their note counts
    #[must_use]
    pub fn folders_with_counts(&self) -> Vec<(Folder, usize)> {
        let library = self.library.read();
        library
            .folders()
            .list()
            .iter()
            .map(|folder| (folder.clone(), library.notes().count_in(&folder.id)))
            .collect()
    }

    /// Whether any note exists at all (landing vs gallery)
    #[must_use]
    pub fn has_notes(&self) -> bool {
        !self.library.read().notes().is_empty()
    }
}
