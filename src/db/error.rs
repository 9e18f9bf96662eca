//! Database-specific error types
//!
//! This module defines all error types that can occur while resolving paths,
//! mutating the tag database, or moving it to and from disk.
//!
//! # Error Types
//!
//! - **`InvalidInput`**: Empty names, unknown colors, empty batches
//! - **`AlreadyExists`**: Creating a tag whose name is taken
//! - **`UnknownTag`**: Attaching a tag that was never created
//! - **`PathResolution`**: Home directory or absolute path could not be determined
//! - **`CorruptStore`**: The store file is not a valid database document
//! - **`StoreRead`** / **`StoreWrite`**: I/O failures on the store file
//!
//! All errors implement `std::error::Error` via the `thiserror` crate.

use std::path::PathBuf;
use thiserror::Error;

/// Database-specific errors
#[derive(Debug, Error)]
pub enum DbError {
    /// Invalid input provided (e.g., empty tag name or unknown color)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A tag with this name is already defined
    #[error("Tag '{0}' already exists")]
    AlreadyExists(String),

    /// The tag is not defined in the database
    #[error("Tag '{0}' does not exist")]
    UnknownTag(String),

    /// A path argument could not be turned into a canonical key
    #[error("Cannot resolve path '{path}': {reason}")]
    PathResolution { path: String, reason: String },

    /// The store file exists but is not a valid database document
    #[error("Corrupt store at {}: {source}", path.display())]
    CorruptStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The store file exists but could not be read
    #[error("Error while reading store {}: {source}", path.display())]
    StoreRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The store could not be written back to disk
    #[error("Error while writing store {}: {source}", path.display())]
    StoreWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DbError {
    pub(crate) fn path_resolution(path: impl Into<String>, reason: impl ToString) -> Self {
        Self::PathResolution {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
