//! Error types for repodocs

use std::path::PathBuf;
use thiserror::Error;

/// repodocs error type
#[derive(Error, Debug)]
pub enum Error {
    /// The configured directory could not be turned into an absolute path
    #[error("Failed to resolve path {path}: {source}")]
    PathResolution {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document root is missing, not a directory, or inaccessible
    #[error("Failed to open document root {path}: {source}")]
    RootOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Walking the document tree failed
    #[error("Failed to walk document root: {0}")]
    Walk(#[from] walkdir::Error),

    /// A path resolved to a location outside the document root
    #[error("Path escapes document root: {0}")]
    OutsideRoot(String),

    /// Document is not in the index
    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    /// Reading an indexed document failed
    #[error("Failed to read document {filename}: {source}")]
    Read {
        filename: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for repodocs operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether this error means the document was never indexed
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::DocumentNotFound(_))
    }
}
