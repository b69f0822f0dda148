//! Error types for mesh I/O.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for mesh I/O operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur while reading or writing mesh files.
#[derive(Debug, Error)]
pub enum IoError {
    /// Input file does not exist.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// File content is not valid STL.
    #[error("invalid STL content: {message}")]
    InvalidContent {
        /// What was wrong with the content.
        message: String,
    },

    /// Binary STL ended before the declared number of facets.
    #[error("truncated STL: header declares {declared} facets, file holds {read}")]
    TruncatedFacets {
        /// Facet count from the header.
        declared: u32,
        /// Facets actually present.
        read: u32,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed numeric field in an ASCII STL.
    #[error("float parsing error: {0}")]
    ParseFloat(#[from] std::num::ParseFloatError),
}

impl IoError {
    /// Create an `InvalidContent` error.
    #[must_use]
    pub fn invalid_content(message: impl Into<String>) -> Self {
        Self::InvalidContent {
            message: message.into(),
        }
    }
}
