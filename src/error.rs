//! Error types for saloon-inspect.
//!
//! The reporter itself never fails on missing or malformed integrations;
//! these errors come from scaffolding and serialization.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using SaloonError.
pub type Result<T> = std::result::Result<T, SaloonError>;

/// Errors that can occur in saloon-inspect operations.
#[derive(Error, Debug)]
pub enum SaloonError {
    /// I/O error during file operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A class or integration name that is not a valid identifier
    #[error("Invalid name: '{0}' (use letters, digits and underscores, not starting with a digit)")]
    InvalidName(String),

    /// Scaffold target already exists
    #[error("{0} already exists")]
    AlreadyExists(PathBuf),
}
