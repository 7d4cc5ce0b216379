//! macqr_icons - icon assets for the macQR menu-bar scanner
//!
//! Generates the application's PNG icons: a colourful tile with a real QR
//! symbol, a decorative "modern" tile, and a plain black-on-white symbol at
//! two sizes. A small verification decoder reads the symbols back so that
//! generated assets can be checked.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Generator configuration (output directory, payload)
pub mod config;
/// QR decoding modules (format extraction, error correction, data modes)
pub mod decoder;
/// Symbol location and module sampling in rasters
pub mod detector;
/// QR encoding and module rendering
pub mod encoder;
/// Error types
pub mod error;
/// Icon generators
pub mod icons;
/// Core data structures (BitMatrix, Version, EcLevel, etc.)
pub mod models;
/// Canvas, drawing primitives and resampling
pub mod raster;
/// Utility functions (grayscale, binarization)
pub mod utils;

pub use config::IconConfig;
pub use decoder::decode_matrix;
pub use detector::{scan_image, scan_png};
pub use encoder::{QrEncoder, QrStyle};
pub use error::{IconError, Result};
pub use icons::{IconKind, generate_all};
pub use models::{BitMatrix, DecodedQr, EcLevel, MaskPattern, QrSymbol, Version};
pub use raster::{Canvas, CanvasMode, Rect};
