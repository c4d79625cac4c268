//! Error handling for Toolverse.
//!
//! The canvas itself has no error type: invalid interactions are
//! deliberate no-ops and unresolvable references render fail-soft.
//! The only hard failure path is the persistence layer, whose errors
//! are defined here so both the storage crate and the application can
//! speak the same type.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Storage error type
///
/// Represents failures loading or saving the persisted store. A
/// malformed snapshot is propagated to the owning application; the
/// canvas refuses to render a graph it could not parse.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to read the store file from disk
    #[error("failed to read store file {path}: {source}")]
    Read {
        /// Path of the file that could not be read.
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the store file to disk
    #[error("failed to write store file {path}: {source}")]
    Write {
        /// Path of the file that could not be written.
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot did not parse as a store record
    #[error("malformed store record: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The snapshot parsed but declared a version this build cannot read
    #[error("unsupported store version: {version}")]
    UnsupportedVersion {
        /// The declared version string.
        version: String,
    },
}

/// Main error type for Toolverse
///
/// A unified error type used in public APIs of the root crate.
#[derive(Error, Debug)]
pub enum Error {
    /// Storage error
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a storage error
    pub fn is_storage_error(&self) -> bool {
        matches!(self, Error::Storage(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
