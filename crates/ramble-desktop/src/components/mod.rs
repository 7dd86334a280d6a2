//! UI Components
//!
//! Reusable UI components for the desktop application.

mod create_folder_dialog;
mod folder_dock;
mod mic_button;
mod note_tile;
mod notes_gallery;
mod recording_card;

pub use create_folder_dialog::CreateFolderDialogView;
pub use folder_dock::FolderDock;
pub use mic_button::MicButton;
pub use note_tile::NoteTile;
pub use notes_gallery::NotesGallery;
pub use recording_card::RecordingCardModal;
