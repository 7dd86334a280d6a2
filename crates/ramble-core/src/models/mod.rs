//! Data models for Ramble

mod folder;
mod note;
mod settings;

pub use folder::{derive_folder_id, Folder, FolderGlyph, FolderId};
pub use note::{Note, NoteId, NotePatch};
pub use settings::{CardTimings, Settings, ThemeMode};
