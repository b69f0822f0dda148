//! Error types for drawing sheet rendering.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while composing or writing a drawing sheet.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Layout presets exist for 1, 2, or 3 views only.
    #[error("unsupported view count: {0} (layouts exist for 1, 2, or 3 views)")]
    UnsupportedViewCount(usize),

    /// Canvas allocation failed (zero or absurd dimensions).
    #[error("cannot allocate {width}x{height} canvas")]
    InvalidCanvas {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// PNG encoding or writing failed.
    #[error("failed to write PNG {path}: {message}")]
    PngWrite {
        /// Output path.
        path: PathBuf,
        /// Encoder error description.
        message: String,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
