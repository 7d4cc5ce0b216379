//! Error types for icon generation and verification

use thiserror::Error;

/// Result type alias for icon operations
pub type Result<T> = std::result::Result<T, IconError>;

/// Errors that can occur while generating or verifying icons
#[derive(Error, Debug)]
pub enum IconError {
    /// Payload could not be encoded into a QR symbol
    #[error("QR encoding failed: {0}")]
    Encode(#[from] qrcode::types::QrError),

    /// PNG encoding or decoding failed
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Drawing coordinates describe an impossible shape
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Colour literal could not be parsed
    #[error("Invalid colour literal: {0:?}")]
    InvalidColor(String),

    /// No QR symbol could be located in an image
    #[error("No QR symbol found: {0}")]
    NotFound(String),

    /// A located symbol could not be decoded
    #[error("QR decoding failed: {0}")]
    Decode(String),
}
