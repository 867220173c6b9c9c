//! Error types for the tone-histogram crates.

use thiserror::Error;

/// Result type alias using HistoError.
pub type HistoResult<T> = Result<T, HistoError>;

/// Primary error type for histogram operations.
#[derive(Debug, Error)]
pub enum HistoError {
    // === Configuration Errors ===
    #[error("Invalid chart dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Invalid color value: {0}")]
    InvalidColor(String),

    // === Surface Errors ===
    #[error("Surface allocation failed: {0}")]
    SurfaceAllocation(String),

    // === Encoding Errors ===
    #[error("PNG encoding failed: {0}")]
    Encode(String),

    #[error("Failed to decode source image: {0}")]
    ImageDecode(String),
}

// Conversion from common error types
impl From<std::io::Error> for HistoError {
    fn from(err: std::io::Error) -> Self {
        HistoError::Encode(err.to_string())
    }
}
