use super::ICON_SIZE;
use crate::config::IconConfig;
use crate::encoder::{QrEncoder, QrStyle};
use crate::error::Result;
use crate::models::EcLevel;
use crate::raster::resample::resize_rgba_lanczos;
use crate::raster::{Canvas, CanvasMode, opaque, parse_hex_color};
use log::debug;
use std::path::PathBuf;

/// Output file name
pub const FILE_NAME: &str = "macQR_colorful.png";
/// Background fill
pub const BACKGROUND: &str = "#4A90E2";
/// Edge length the symbol is resampled to before compositing
pub const QR_SIZE: u32 = 300;

/// Draw the icon for `payload`
///
/// The symbol is encoded at level H, rendered white on transparent, resized
/// to [`QR_SIZE`] and pasted at the centre using its own alpha as stencil.
pub fn render(payload: &str) -> Result<Canvas> {
    let background = opaque(parse_hex_color(BACKGROUND)?);
    let mut canvas = Canvas::filled(CanvasMode::Rgb, ICON_SIZE, ICON_SIZE, background);

    let encoder = QrEncoder::new(EcLevel::H);
    let symbol = encoder.encode(payload)?;
    let modules = encoder.render(&symbol, QrStyle::WHITE_ON_TRANSPARENT);
    debug!(
        "Resizing {}x{} symbol raster to {}x{}",
        modules.width(),
        modules.height(),
        QR_SIZE,
        QR_SIZE
    );
    let modules = resize_rgba_lanczos(&modules, QR_SIZE, QR_SIZE);

    let offset = ((ICON_SIZE - QR_SIZE) / 2) as i64;
    canvas.paste_masked(&modules, offset, offset);
    Ok(canvas)
}

/// Render and write `macQR_colorful.png`
pub fn generate(config: &IconConfig) -> Result<Vec<PathBuf>> {
    let path = config.output_path(FILE_NAME);
    render(&config.payload)?.save(&path)?;
    Ok(vec![path])
}
