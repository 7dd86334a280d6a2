//! Error types for ramble-core

use thiserror::Error;

use crate::models::FolderId;

/// Result type alias using ramble-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ramble-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A folder with the same derived id already exists
    #[error("Folder already exists: {0}")]
    DuplicateFolder(FolderId),

    /// Referenced folder is not in the registry
    #[error("Unknown folder: {0}")]
    UnknownFolder(FolderId),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
