/// High-quality resampling for icon rasters
///
/// RGBA images are resized on alpha-premultiplied samples so that fully
/// transparent pixels do not bleed their (meaningless) colour into the
/// edges of opaque regions.
use image::imageops::{self, FilterType};
use image::{GrayImage, Rgba32FImage, RgbaImage};
use rayon::prelude::*;

/// Resize an RGBA raster with a Lanczos3 filter
pub fn resize_rgba_lanczos(src: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    let mut premultiplied = Rgba32FImage::new(src.width(), src.height());
    premultiplied
        .par_chunks_mut(4)
        .zip(src.par_chunks(4))
        .for_each(|(dst, px)| {
            let alpha = px[3] as f32 / 255.0;
            for c in 0..3 {
                dst[c] = px[c] as f32 / 255.0 * alpha;
            }
            dst[3] = alpha;
        });

    let resized = imageops::resize(&premultiplied, width, height, FilterType::Lanczos3);

    let mut out = RgbaImage::new(width, height);
    out.par_chunks_mut(4)
        .zip(resized.par_chunks(4))
        .for_each(|(dst, px)| {
            let alpha = px[3].clamp(0.0, 1.0);
            if alpha <= 0.0 {
                dst.fill(0);
                return;
            }
            for c in 0..3 {
                dst[c] = to_u8(px[c] / alpha);
            }
            dst[3] = to_u8(alpha);
        });
    out
}

/// Resize a grayscale raster with a Lanczos3 filter
pub fn resize_luma_lanczos(src: &GrayImage, width: u32, height: u32) -> GrayImage {
    imageops::resize(src, width, height, FilterType::Lanczos3)
}

fn to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
