//! In-memory storage for Ramble

mod folders;
mod library;
mod notes;

pub use folders::{FolderRegistry, DEFAULT_FOLDER};
pub use library::Library;
pub use notes::NoteStore;
