use super::{LumaImage, ModuleGrid};
use crate::models::BitMatrix;

/// Sample the centre of every module in `grid`
///
/// Each module is read as the mean luminance of a small window around its
/// centre so that resampling halos at module edges do not flip it.
pub fn sample(image: &LumaImage, grid: &ModuleGrid) -> BitMatrix {
    let mut matrix = BitMatrix::square(grid.size);
    let radius_x = window_radius(grid.pitch_x);
    let radius_y = window_radius(grid.pitch_y);

    for row in 0..grid.size {
        let cy = grid.top + (row as f64 + 0.5) * grid.pitch_y;
        for col in 0..grid.size {
            let cx = grid.left + (col as f64 + 0.5) * grid.pitch_x;
            let Some(level) = window_mean(image, cx, cy, radius_x, radius_y) else {
                continue;
            };
            if image.level_is_ink(level, grid.polarity) {
                matrix.set(col, row, true);
            }
        }
    }

    matrix
}

fn window_radius(pitch: f64) -> i64 {
    ((pitch / 4.0) as i64).clamp(0, 2)
}

fn window_mean(image: &LumaImage, cx: f64, cy: f64, rx: i64, ry: i64) -> Option<u8> {
    let (cx, cy) = (cx.floor() as i64, cy.floor() as i64);
    let mut sum = 0u32;
    let mut count = 0u32;

    for y in cy - ry..=cy + ry {
        if y < 0 || y >= image.height() as i64 {
            continue;
        }
        for x in cx - rx..=cx + rx {
            if x < 0 || x >= image.width() as i64 {
                continue;
            }
            sum += image.get(x as usize, y as usize) as u32;
            count += 1;
        }
    }

    (count > 0).then(|| ((sum + count / 2) / count) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::Polarity;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_sample_checkerboard() {
        // 21x21 modules of 4 px, dark where col + row is even
        let img = RgbaImage::from_fn(84, 84, |x, y| {
            if (x / 4 + y / 4) % 2 == 0 {
                Rgba([0, 0, 0, 255])
            } else {
                Rgba([255, 255, 255, 255])
            }
        });
        let luma = LumaImage::from_rgba(&img);
        let grid = ModuleGrid {
            left: 0.0,
            top: 0.0,
            pitch_x: 4.0,
            pitch_y: 4.0,
            size: 21,
            polarity: Polarity::DarkInk,
        };

        let matrix = sample(&luma, &grid);
        for row in 0..21 {
            for col in 0..21 {
                assert_eq!(matrix.get(col, row), (col + row) % 2 == 0, "module ({col}, {row})");
            }
        }
    }

    #[test]
    fn test_window_clipped_at_edges() {
        let img = RgbaImage::from_pixel(3, 3, Rgba([0, 0, 0, 255]));
        let luma = LumaImage::from_rgba(&img);
        assert_eq!(window_mean(&luma, 0.0, 0.0, 2, 2), Some(0));
        assert_eq!(window_mean(&luma, -10.0, -10.0, 1, 1), None);
    }
}
