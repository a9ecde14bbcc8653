//! Error types for Cardsmith

use thiserror::Error;

/// Main error type for Cardsmith operations
#[derive(Error, Debug)]
pub enum CardError {
    /// Card document text could not be parsed
    #[error("Invalid card document: {0}")]
    InvalidDocument(String),

    /// Card document lacks a required field
    #[error("Card document is missing required field: {0}")]
    MissingField(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Image decoding/encoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// No system font could be located for text rendering
    #[error("No usable system font found for card rendering")]
    FontUnavailable,

    /// Font file exists but could not be parsed
    #[error("Font error: {0}")]
    Font(String),

    /// Image source cannot be read pixel-by-pixel at export time
    #[error("Image source cannot be rasterized: {0}")]
    Unrasterizable(String),
}

/// Result type alias using CardError
pub type CardResult<T> = Result<T, CardError>;
