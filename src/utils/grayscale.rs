/// Luminance conversion for verification
/// Y = (76*R + 150*G + 29*B) >> 8, after compositing over white
use crate::raster::color::luma;
use image::RgbaImage;
use rayon::prelude::*;

/// Convert an RGBA raster to luminance, treating transparency as white paper
pub fn rgba_to_luma_over_white(img: &RgbaImage) -> Vec<u8> {
    let width = img.width() as usize;
    let mut gray = vec![0u8; width * img.height() as usize];
    if width == 0 {
        return gray;
    }

    gray.par_chunks_mut(width)
        .zip(img.par_chunks(width * 4))
        .for_each(|(row, src)| {
            for (out, px) in row.iter_mut().zip(src.chunks_exact(4)) {
                let a = px[3] as u32;
                let over_white = |c: u8| ((c as u32 * a + 255 * (255 - a) + 127) / 255) as u8;
                *out = luma(over_white(px[0]), over_white(px[1]), over_white(px[2]));
            }
        });

    gray
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_opaque_pixels() {
        let mut img = RgbaImage::from_pixel(2, 1, Rgba([0, 0, 0, 255]));
        img.put_pixel(1, 0, Rgba([74, 144, 226, 255]));
        let gray = rgba_to_luma_over_white(&img);
        assert_eq!(gray[0], 0);
        assert_eq!(gray[1], luma(74, 144, 226));
    }

    #[test]
    fn test_transparent_pixels_read_as_white() {
        let img = RgbaImage::from_pixel(3, 3, Rgba([0, 0, 0, 0]));
        let gray = rgba_to_luma_over_white(&img);
        assert!(gray.iter().all(|&g| g == luma(255, 255, 255)));
    }
}
