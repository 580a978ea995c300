//! Error types for chromata-core
//!
//! Provides a unified error type for the container operations in the core
//! crate. Each variant captures enough context for diagnostics without
//! exposing internal implementation details.

use thiserror::Error;

/// Chromata core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid grid dimensions
    #[error("invalid grid dimensions: {rows}x{cols}")]
    InvalidDimension { rows: usize, cols: usize },

    /// Grid dimension mismatch
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    /// Cell index out of bounds
    #[error("cell out of bounds: ({row}, {col}) in a {rows}x{cols} grid")]
    CellOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Flat buffer length does not match the requested shape
    #[error("buffer length mismatch: got {len}, expected {expected}")]
    BufferLengthMismatch { len: usize, expected: usize },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
