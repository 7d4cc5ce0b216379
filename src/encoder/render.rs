use super::QrEncoder;
use crate::models::QrSymbol;
use image::{GrayImage, Luma, Rgba, RgbaImage};

/// Colours for dark modules (`fill`) and light modules plus quiet zone (`back`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QrStyle {
    /// Dark module colour
    pub fill: Rgba<u8>,
    /// Light module and quiet zone colour
    pub back: Rgba<u8>,
}

impl QrStyle {
    /// Black modules on white
    pub const MONOCHROME: QrStyle = QrStyle {
        fill: Rgba([0, 0, 0, 255]),
        back: Rgba([255, 255, 255, 255]),
    };

    /// White modules on a fully transparent background
    pub const WHITE_ON_TRANSPARENT: QrStyle = QrStyle {
        fill: Rgba([255, 255, 255, 255]),
        back: Rgba([0, 0, 0, 0]),
    };
}

impl QrEncoder {
    /// Render `symbol` as an RGBA raster, one `box_size` square per module
    pub fn render(&self, symbol: &QrSymbol, style: QrStyle) -> RgbaImage {
        let size = self.image_size(symbol);
        let mut img = RgbaImage::from_pixel(size, size, style.back);
        self.for_each_dark_pixel(symbol, |x, y| img.put_pixel(x, y, style.fill));
        img
    }

    /// Render `symbol` black-on-white as 8-bit grayscale
    pub fn render_luma(&self, symbol: &QrSymbol) -> GrayImage {
        let size = self.image_size(symbol);
        let mut img = GrayImage::from_pixel(size, size, Luma([255]));
        self.for_each_dark_pixel(symbol, |x, y| img.put_pixel(x, y, Luma([0])));
        img
    }

    fn for_each_dark_pixel(&self, symbol: &QrSymbol, mut paint: impl FnMut(u32, u32)) {
        let modules = &symbol.modules;
        for row in 0..modules.height() {
            for col in 0..modules.width() {
                if !modules.get(col, row) {
                    continue;
                }
                let left = (col as u32 + self.border()) * self.box_size();
                let top = (row as u32 + self.border()) * self.box_size();
                for y in top..top + self.box_size() {
                    for x in left..left + self.box_size() {
                        paint(x, y);
                    }
                }
            }
        }
    }
}
