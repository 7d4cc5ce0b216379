use super::ICON_SIZE;
use crate::config::IconConfig;
use crate::encoder::QrEncoder;
use crate::error::Result;
use crate::models::EcLevel;
use crate::raster::resample::resize_luma_lanczos;
use image::{GrayImage, ImageFormat};
use std::path::PathBuf;

/// Symbol at its natural size (10 px modules, 4 module border)
pub const FILE_NAME: &str = "qrcode.png";
/// Symbol resampled to the icon size
pub const RESIZED_FILE_NAME: &str = "qrcode_512.png";

/// Render `payload` black on white at level L
pub fn render(payload: &str) -> Result<GrayImage> {
    let encoder = QrEncoder::new(EcLevel::L);
    let symbol = encoder.encode(payload)?;
    Ok(encoder.render_luma(&symbol))
}

/// Resample a rendered symbol to [`ICON_SIZE`]
pub fn resize(symbol: &GrayImage) -> GrayImage {
    resize_luma_lanczos(symbol, ICON_SIZE, ICON_SIZE)
}

/// Render and write `qrcode.png` and `qrcode_512.png`
pub fn generate(config: &IconConfig) -> Result<Vec<PathBuf>> {
    let symbol = render(&config.payload)?;
    let path = config.output_path(FILE_NAME);
    symbol.save_with_format(&path, ImageFormat::Png)?;

    let resized_path = config.output_path(RESIZED_FILE_NAME);
    resize(&symbol).save_with_format(&resized_path, ImageFormat::Png)?;

    Ok(vec![path, resized_path])
}
