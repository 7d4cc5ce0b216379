use super::shapes::Rect;
use crate::error::Result;
use image::{DynamicImage, Rgba, RgbaImage};
use log::debug;
use rayon::prelude::*;
use std::path::Path;

/// Pixel layout a canvas is saved with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasMode {
    /// Opaque colour; alpha is ignored when drawing and dropped on save
    Rgb,
    /// Colour plus alpha
    Rgba,
}

/// In-memory raster that draw calls mutate in place
///
/// Pixels are always stored as RGBA; in [`CanvasMode::Rgb`] every pixel keeps
/// alpha 255.
#[derive(Debug, Clone)]
pub struct Canvas {
    mode: CanvasMode,
    pixels: RgbaImage,
}

impl Canvas {
    /// Allocate a canvas filled with a solid colour
    pub fn filled(mode: CanvasMode, width: u32, height: u32, color: Rgba<u8>) -> Self {
        let color = match mode {
            CanvasMode::Rgb => Rgba([color[0], color[1], color[2], 255]),
            CanvasMode::Rgba => color,
        };
        Self {
            mode,
            pixels: RgbaImage::from_pixel(width, height, color),
        }
    }

    /// Allocate a fully transparent RGBA canvas (white, alpha 0)
    pub fn transparent(width: u32, height: u32) -> Self {
        Self::filled(CanvasMode::Rgba, width, height, Rgba([255, 255, 255, 0]))
    }

    /// Canvas width in pixels
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Canvas height in pixels
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Pixel layout
    pub fn mode(&self) -> CanvasMode {
        self.mode
    }

    /// Pixel at `(x, y)`, `None` outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        (x < self.width() && y < self.height()).then(|| *self.pixels.get_pixel(x, y))
    }

    /// Replace every pixel inside `rect` with `color`
    pub fn fill_rectangle(&mut self, rect: Rect, color: Rgba<u8>) {
        let color = self.normalize(color);
        let Some(span) = rect.clip(self.width(), self.height()) else {
            return;
        };
        for y in span.y_start..span.y_end {
            for x in span.x_start..span.x_end {
                self.pixels.put_pixel(x, y, color);
            }
        }
    }

    /// Replace every pixel inside `rect` with `color`, cutting each corner
    /// with a circle of `radius` pixels
    pub fn fill_rounded_rectangle(&mut self, rect: Rect, radius: i64, color: Rgba<u8>) {
        let color = self.normalize(color);
        let r = radius.clamp(0, (rect.x1 - rect.x0).min(rect.y1 - rect.y0) / 2);
        let Some(span) = rect.clip(self.width(), self.height()) else {
            return;
        };

        // Points farther than this (squared) from a corner centre are cut
        let limit = r * r + r;
        let corner_center = |p: i64, lo: i64, hi: i64| {
            if p < lo + r {
                Some(lo + r)
            } else if p > hi - r {
                Some(hi - r)
            } else {
                None
            }
        };

        for y in span.y_start..span.y_end {
            let cy = corner_center(y as i64, rect.y0, rect.y1);
            for x in span.x_start..span.x_end {
                let inside = match (corner_center(x as i64, rect.x0, rect.x1), cy) {
                    (Some(cx), Some(cy)) => {
                        let dx = x as i64 - cx;
                        let dy = y as i64 - cy;
                        dx * dx + dy * dy <= limit
                    }
                    _ => true,
                };
                if inside {
                    self.pixels.put_pixel(x, y, color);
                }
            }
        }
    }

    /// Composite `src` with its top-left corner at `(x, y)`, using the
    /// source alpha as stencil
    pub fn paste_masked(&mut self, src: &RgbaImage, x: i64, y: i64) {
        let Some(span) = Rect::new(
            x,
            y,
            x + src.width() as i64 - 1,
            y + src.height() as i64 - 1,
        )
        .ok()
        .and_then(|r| r.clip(self.width(), self.height())) else {
            return;
        };
        debug!(
            "Pasting {}x{} raster at ({}, {}) onto {}x{} canvas",
            src.width(),
            src.height(),
            x,
            y,
            self.width(),
            self.height()
        );

        let channels = match self.mode {
            CanvasMode::Rgb => 3,
            CanvasMode::Rgba => 4,
        };
        let stride = self.width() as usize * 4;
        let raw: &mut [u8] = &mut self.pixels;

        raw.par_chunks_mut(stride)
            .enumerate()
            .skip(span.y_start as usize)
            .take((span.y_end - span.y_start) as usize)
            .for_each(|(row, line)| {
                let sy = (row as i64 - y) as u32;
                for col in span.x_start..span.x_end {
                    let sx = (col as i64 - x) as u32;
                    let source = src.get_pixel(sx, sy);
                    let mask = source[3];
                    let dst = &mut line[col as usize * 4..col as usize * 4 + 4];
                    for c in 0..channels {
                        dst[c] = blend(dst[c], source[c], mask);
                    }
                }
            });
    }

    /// Borrow the pixel buffer
    pub fn as_image(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Pixel buffer in the canvas' own layout
    pub fn to_dynamic(&self) -> DynamicImage {
        let rgba = DynamicImage::ImageRgba8(self.pixels.clone());
        match self.mode {
            CanvasMode::Rgb => DynamicImage::ImageRgb8(rgba.into_rgb8()),
            CanvasMode::Rgba => rgba,
        }
    }

    /// Serialize as PNG
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.to_dynamic()
            .save_with_format(path, image::ImageFormat::Png)?;
        Ok(())
    }

    fn normalize(&self, color: Rgba<u8>) -> Rgba<u8> {
        match self.mode {
            CanvasMode::Rgb => Rgba([color[0], color[1], color[2], 255]),
            CanvasMode::Rgba => color,
        }
    }
}

/// `dst * (255 - mask) + src * mask`, divided by 255 with rounding
fn blend(dst: u8, src: u8, mask: u8) -> u8 {
    let tmp = dst as u32 * (255 - mask as u32) + src as u32 * mask as u32 + 128;
    (((tmp >> 8) + tmp) >> 8) as u8
}
