//! # Catalog Error Types
//!
//! - [`LoadError`] — the course directory itself is unusable. Fatal at
//!   startup.
//! - [`SkipReason`] — why a single course file was left out. Logged and
//!   recorded in the load report, never returned to callers of the store.
//! - [`CatalogError`] — store lookup failures. The only error that leaves
//!   the catalog during serving.

use morbror_schema::{DocumentError, ValidationError};
use thiserror::Error;

/// The course directory could not be enumerated.
#[derive(Error, Debug)]
pub enum LoadError {
    /// No file or directory exists at the configured path.
    #[error("course directory not found: {path}")]
    DirectoryNotFound { path: String },

    /// The configured path exists but is not a directory.
    #[error("course path is not a directory: {path}")]
    NotADirectory { path: String },

    /// The directory exists but could not be read.
    #[error("failed to read course directory {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Why a course file was skipped during load.
#[derive(Error, Debug)]
pub enum SkipReason {
    /// The file could not be read as UTF-8 text.
    #[error("unreadable: {0}")]
    Unreadable(#[from] std::io::Error),

    /// The contents are not well-formed JSON.
    #[error("invalid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// The JSON does not match the course schema.
    #[error("schema violation at {0}")]
    Invalid(#[from] ValidationError),
}

impl From<DocumentError> for SkipReason {
    fn from(err: DocumentError) -> Self {
        match err {
            DocumentError::Decode(e) => Self::Decode(e),
            DocumentError::Invalid(e) => Self::Invalid(e),
        }
    }
}

/// Store lookup failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No course with this id was loaded.
    #[error("course {course_id}")]
    NotFound { course_id: String },
}

/// Unrecognized `LoadOrder` name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown load order {0:?}, expected \"filesystem\" or \"sorted\"")]
pub struct ParseLoadOrderError(pub String);
