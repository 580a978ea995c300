//! Error types for chromata-color

use thiserror::Error;

/// Errors that can occur during color processing operations
#[derive(Debug, Error)]
pub enum ColorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] chromata_core::Error),

    /// Malformed color representation
    #[error("invalid color input: {0}")]
    InvalidInput(String),

    /// Unsupported cluster count for palette lookup
    #[error("invalid cluster count: {given} (expected 12, 13 or 31)")]
    InvalidClusterCount { given: usize },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
