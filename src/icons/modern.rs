use super::ICON_SIZE;
use crate::config::IconConfig;
use crate::error::Result;
use crate::raster::{Canvas, Rect, opaque, parse_hex_color};
use image::Rgba;
use std::path::PathBuf;

/// Output file name
pub const FILE_NAME: &str = "macQR_modern.png";
/// System blue used for the tile and the pattern rings
pub const BACKGROUND: &str = "#007AFF";
/// Accent colour of the motif
pub const ACCENT: Rgba<u8> = Rgba([255, 255, 255, 255]);

const CORNER_RADIUS: i64 = 80;
const QR_SIZE: i64 = 300;
const QR_PADDING: i64 = (ICON_SIZE as i64 - QR_SIZE) / 2;
const CELL: i64 = QR_SIZE / 7;
const FINDER_SIZE: i64 = 4 * CELL;
const OUTER_PADDING: i64 = 20;
const INNER_PADDING: i64 = OUTER_PADDING + 10;
const SCAN_LINE_HALF_HEIGHT: i64 = 5;

/// Draw the icon
///
/// Nothing here is a real symbol: three finder-like squares and a scan bar
/// on a rounded system-blue tile.
pub fn render() -> Result<Canvas> {
    let blue = opaque(parse_hex_color(BACKGROUND)?);
    let mut canvas = Canvas::transparent(ICON_SIZE, ICON_SIZE);
    let size = ICON_SIZE as i64;

    canvas.fill_rounded_rectangle(Rect::new(0, 0, size, size)?, CORNER_RADIUS, blue);

    // The inner background is larger than the frame and covers it completely
    let area = Rect::square(QR_PADDING, QR_PADDING, QR_SIZE)?;
    canvas.fill_rectangle(area.outset(OUTER_PADDING)?, ACCENT);
    canvas.fill_rectangle(area.outset(INNER_PADDING)?, blue);

    let far = QR_PADDING + QR_SIZE - FINDER_SIZE;
    for (x, y) in [(QR_PADDING, QR_PADDING), (far, QR_PADDING), (QR_PADDING, far)] {
        draw_finder(&mut canvas, x, y, blue)?;
    }

    let scan_y = QR_PADDING + QR_SIZE / 2;
    let scan_bar = Rect::new(
        QR_PADDING,
        scan_y - SCAN_LINE_HALF_HEIGHT,
        QR_PADDING + QR_SIZE,
        scan_y + SCAN_LINE_HALF_HEIGHT,
    )?;
    canvas.fill_rectangle(scan_bar, ACCENT);

    Ok(canvas)
}

/// Accent square, blue ring one cell in, accent centre two cells in
fn draw_finder(canvas: &mut Canvas, x: i64, y: i64, ring: Rgba<u8>) -> Result<()> {
    let outer = Rect::square(x, y, FINDER_SIZE)?;
    canvas.fill_rectangle(outer, ACCENT);
    canvas.fill_rectangle(outer.inset(CELL)?, ring);
    canvas.fill_rectangle(outer.inset(2 * CELL)?, ACCENT);
    Ok(())
}

/// Render and write `macQR_modern.png`
pub fn generate(config: &IconConfig) -> Result<Vec<PathBuf>> {
    let path = config.output_path(FILE_NAME);
    render()?.save(&path)?;
    Ok(vec![path])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::CanvasMode;

    const BLUE: Rgba<u8> = Rgba([0, 122, 255, 255]);
    const CLEAR: Rgba<u8> = Rgba([255, 255, 255, 0]);

    #[test]
    fn test_geometry_constants() {
        assert_eq!(QR_PADDING, 106);
        assert_eq!(CELL, 42);
        assert_eq!(FINDER_SIZE, 168);
    }

    #[test]
    fn test_rounded_corners_transparent() {
        let canvas = render().unwrap();
        assert_eq!(canvas.mode(), CanvasMode::Rgba);
        for (x, y) in [(0, 0), (511, 0), (0, 511), (511, 511)] {
            assert_eq!(canvas.pixel(x, y), Some(CLEAR), "corner ({x}, {y})");
        }
        assert_eq!(canvas.pixel(256, 0), Some(BLUE));
        assert_eq!(canvas.pixel(0, 256), Some(BLUE));
    }

    #[test]
    fn test_frame_is_overdrawn() {
        let canvas = render().unwrap();
        // Between the frame edge (86) and the symbol area (106)
        assert_eq!(canvas.pixel(90, 256), Some(BLUE));
        assert_eq!(canvas.pixel(76, 76), Some(BLUE));
    }

    #[test]
    fn test_finder_rings() {
        let canvas = render().unwrap();
        let white = Some(ACCENT);
        assert_eq!(canvas.pixel(106, 106), white);
        assert_eq!(canvas.pixel(148, 148), Some(BLUE));
        assert_eq!(canvas.pixel(190, 190), white);
        assert_eq!(canvas.pixel(191, 190), Some(BLUE));
        // Top-right and bottom-left outer corners
        assert_eq!(canvas.pixel(406, 106), white);
        assert_eq!(canvas.pixel(106, 406), white);
        // No pattern in the bottom-right
        assert_eq!(canvas.pixel(380, 380), Some(BLUE));
    }

    #[test]
    fn test_scan_bar() {
        let canvas = render().unwrap();
        // The bar runs between the two upper patterns and merges with them
        assert_eq!(canvas.pixel(256, 256), Some(ACCENT));
        assert_eq!(canvas.pixel(406, 261), Some(ACCENT));
        assert_eq!(canvas.pixel(105, 256), Some(BLUE));
        assert_eq!(canvas.pixel(407, 256), Some(BLUE));
        assert_eq!(canvas.pixel(300, 300), Some(BLUE));
    }
}
