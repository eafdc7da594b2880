//! Error types for code generation.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Task definition error.
    #[error("task error: {0}")]
    Scan(#[from] enumsync_scan::ScanError),

    /// A header could not be opened or read.
    #[error("cannot read header '{}': {source}", .path.display())]
    Source {
        /// Resolved header path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// IO error writing the output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Code generation error.
    #[error("generation error: {message}")]
    Generation {
        /// Error message.
        message: String,
    },
}

impl CodegenError {
    /// Creates a header read error for the given path.
    pub fn unreadable(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Source {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a generation error with the given message.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }
}
