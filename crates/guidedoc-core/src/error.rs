//! Error types for guidedoc

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for guidedoc operations
#[derive(Error, Debug)]
pub enum GuidedocError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input document missing or unreadable
    #[error("Failed to read {}: {source}", .path.display())]
    Input {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Output document could not be written
    #[error("Failed to write {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Render error while building the output document
    #[error("Render error: {0}")]
    Render(String),
}

/// Result type alias for guidedoc operations
pub type Result<T> = std::result::Result<T, GuidedocError>;
