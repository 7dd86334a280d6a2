//! Application services
//!
//! Platform integrations behind the core traits.

mod clipboard;

pub use clipboard::SystemClipboard;
