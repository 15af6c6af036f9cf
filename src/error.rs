//! Error types for junita-rebrand.
//!
//! Fatal errors return `Result<T>` which aliases `Result<T, RebrandError>`.
//! Per-file and per-rename failures are recorded in the run results instead.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a rebrand run.
#[derive(Debug, Error)]
pub enum RebrandError {
    /// Repository root does not exist.
    #[error("Path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// Repository root is not a directory.
    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),

    /// A user-supplied skip pattern failed to compile.
    #[error("Invalid skip pattern '{0}': {1}")]
    InvalidPattern(String, glob::PatternError),

    /// File system operation failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Unexpected error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for junita-rebrand operations.
pub type Result<T> = std::result::Result<T, RebrandError>;
