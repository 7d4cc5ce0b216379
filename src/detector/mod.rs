//! Symbol location for verification
//!
//! Finds an upright, axis-aligned QR symbol in a raster and samples its
//! modules. Only the layouts this crate writes are expected:
//! - Dark modules on a light background (plain icons)
//! - Light modules on a coloured background (colorful icon)

/// Bounding box search and module count estimation
pub mod locate;
/// Module grid sampling
pub mod sampler;

pub use locate::locate;
pub use sampler::sample;

use crate::decoder::decode_matrix;
use crate::error::{IconError, Result};
use crate::models::DecodedQr;
use crate::utils::binarization::otsu_threshold;
use crate::utils::grayscale::rgba_to_luma_over_white;
use image::RgbaImage;
use log::debug;
use std::path::Path;

/// Which side of the threshold the symbol's dark modules fall on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// Modules are darker than the background
    DarkInk,
    /// Modules are brighter than the background
    BrightInk,
}

impl Polarity {
    /// Polarities in the order they are tried
    pub const ALL: [Polarity; 2] = [Polarity::DarkInk, Polarity::BrightInk];
}

/// Luminance raster with its global threshold
#[derive(Debug, Clone)]
pub struct LumaImage {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
    threshold: u8,
}

impl LumaImage {
    /// Convert an RGBA raster (transparency reads as white) and threshold it
    pub fn from_rgba(img: &RgbaImage) -> Self {
        let pixels = rgba_to_luma_over_white(img);
        let threshold = otsu_threshold(&pixels);
        debug!(
            "Luma image {}x{} with Otsu threshold {}",
            img.width(),
            img.height(),
            threshold
        );
        Self {
            width: img.width() as usize,
            height: img.height() as usize,
            pixels,
            threshold,
        }
    }

    /// Width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Global threshold; levels below it are dark
    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Luminance at `(x, y)`
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.pixels[y * self.width + x]
    }

    /// Whether the pixel at `(x, y)` belongs to a dark module
    #[inline]
    pub fn is_ink(&self, x: usize, y: usize, polarity: Polarity) -> bool {
        self.level_is_ink(self.get(x, y), polarity)
    }

    #[inline]
    fn level_is_ink(&self, level: u8, polarity: Polarity) -> bool {
        match polarity {
            Polarity::DarkInk => level < self.threshold,
            Polarity::BrightInk => level >= self.threshold,
        }
    }
}

/// Where a candidate symbol sits in the image and how many modules it spans
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModuleGrid {
    /// Left edge of the symbol, in pixels
    pub left: f64,
    /// Top edge of the symbol, in pixels
    pub top: f64,
    /// Horizontal module pitch, in pixels
    pub pitch_x: f64,
    /// Vertical module pitch, in pixels
    pub pitch_y: f64,
    /// Modules per side
    pub size: usize,
    /// Which pixels count as dark modules
    pub polarity: Polarity,
}

/// Locate and decode the first readable symbol in `img`
pub fn scan_image(img: &RgbaImage) -> Result<DecodedQr> {
    let luma = LumaImage::from_rgba(img);
    let grids = locate(&luma);
    if grids.is_empty() {
        return Err(IconError::NotFound("no ink pixels in image".into()));
    }

    let mut last_error = None;
    for grid in &grids {
        let matrix = sample(&luma, grid);
        match decode_matrix(&matrix) {
            Ok(decoded) => {
                debug!(
                    "Decoded {} modules with {:?} at ({:.1}, {:.1})",
                    grid.size, grid.polarity, grid.left, grid.top
                );
                return Ok(decoded);
            }
            Err(err) => {
                debug!("{}-module {:?} candidate rejected: {}", grid.size, grid.polarity, err);
                last_error = Some(err);
            }
        }
    }

    Err(IconError::NotFound(match last_error {
        Some(err) => format!("{} candidates tried, last failure: {}", grids.len(), err),
        None => "no candidates".into(),
    }))
}

/// Read a PNG (or any format `image` understands) and decode its symbol
pub fn scan_png<P: AsRef<Path>>(path: P) -> Result<DecodedQr> {
    let img = image::open(path.as_ref())?.to_rgba8();
    debug!("Scanning {}", path.as_ref().display());
    scan_image(&img)
}
