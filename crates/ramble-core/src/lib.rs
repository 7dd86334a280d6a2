//! ramble-core - Core library for Ramble
//!
//! Models, the in-memory note and folder stores, and the UI state machines
//! (recording card, note tiles, folder dock, create-folder dialog) used by
//! the desktop app. Nothing here depends on a UI toolkit.

pub mod card;
pub mod clipboard;
pub mod config;
pub mod dialog;
pub mod drag;
pub mod error;
pub mod format;
pub mod gallery;
pub mod models;
pub mod scheduler;
pub mod store;
pub mod tile;
pub mod transcriber;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};
pub use models::{Folder, FolderGlyph, FolderId, Note, NoteId};
pub use store::Library;
