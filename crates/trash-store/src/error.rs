//! Error types for list storage.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing lists.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to read from file system.
    #[error("failed to read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write to file system.
    #[error("failed to write {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV content.
    #[error("malformed list {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Item not found.
    #[error("{kind} not found: {id}")]
    NotFound { kind: String, id: String },

    /// A name pattern matched more than one list.
    #[error("'{pattern}' matches {} lists: {}", matches.len(), matches.join(", "))]
    Ambiguous {
        pattern: String,
        matches: Vec<String>,
    },

    /// Invalid data.
    #[error("invalid data: {0}")]
    InvalidData(String),
}

/// Result type alias for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;
