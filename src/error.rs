//! Error types for Dirpick.
//!
//! This module provides a unified error handling approach using `thiserror`.

use thiserror::Error;

/// Result type alias for Dirpick operations.
pub type Result<T> = std::result::Result<T, DirpickError>;

/// Errors that can occur in Dirpick.
#[derive(Debug, Error)]
pub enum DirpickError {
    /// A directory could not be listed.
    #[error("Failed to read directory: {path}")]
    UnreadablePath {
        /// The directory that was requested.
        path: String,
        /// Underlying cause, if the failure came from the filesystem.
        #[source]
        source: Option<std::io::Error>,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal error.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl DirpickError {
    /// Create an UnreadablePath error caused by an IO failure.
    pub fn unreadable(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::UnreadablePath {
            path: path.into(),
            source: Some(source),
        }
    }

    /// Create an UnreadablePath error for a path the source does not know.
    pub fn unknown_path(path: impl Into<String>) -> Self {
        Self::UnreadablePath {
            path: path.into(),
            source: None,
        }
    }

    /// Create a Terminal error.
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal(message.into())
    }
}
