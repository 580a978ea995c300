//! Error types for chromata-features

use thiserror::Error;

/// Errors that can occur during feature extraction
#[derive(Debug, Error)]
pub enum FeatureError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] chromata_core::Error),

    /// Color library error
    #[error("color error: {0}")]
    Color(#[from] chromata_color::ColorError),

    /// Invalid extraction parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// A component fell outside every declared histogram bin
    #[error("component {value} outside the declared bins of axis {axis}")]
    ValueOutOfBins { axis: usize, value: f64 },

    /// I/O error while writing samples
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Sample serialization error
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for feature extraction
pub type FeatureResult<T> = Result<T, FeatureError>;
