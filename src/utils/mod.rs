//! Utility functions for image verification
//!
//! - Grayscale conversion (RGBA to luminance, transparency as white)
//! - Binarization threshold (Otsu's method)

pub mod binarization;
pub mod grayscale;
