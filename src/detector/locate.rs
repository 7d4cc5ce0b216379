use super::{LumaImage, ModuleGrid, Polarity};
use crate::models::Version;
use log::debug;

/// Module counts tried per polarity, nearest estimate first
const SIZE_ATTEMPTS: usize = 4;

/// Finder patterns are seven modules wide
const FINDER_MODULES: f64 = 7.0;

/// Inclusive bounding box of ink pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct InkBounds {
    min_x: usize,
    min_y: usize,
    max_x: usize,
    max_y: usize,
}

impl InkBounds {
    fn width(&self) -> usize {
        self.max_x - self.min_x + 1
    }

    fn height(&self) -> usize {
        self.max_y - self.min_y + 1
    }
}

/// Candidate module grids for `image`, most plausible first
///
/// Each polarity contributes grids spanning the bounding box of its ink
/// pixels. The module pitch is estimated from the top edge of the top-left
/// finder pattern and the nearest valid symbol sizes are tried in order.
pub fn locate(image: &LumaImage) -> Vec<ModuleGrid> {
    let mut grids = Vec::new();

    for polarity in Polarity::ALL {
        let Some(bounds) = ink_bounds(image, polarity) else {
            continue;
        };
        let Some(finder_run) = finder_run(image, &bounds, polarity) else {
            continue;
        };

        let module = finder_run as f64 / FINDER_MODULES;
        let estimate = bounds.width().max(bounds.height()) as f64 / module;
        debug!(
            "{:?}: ink box {}x{} at ({}, {}), finder run {} px, ~{:.1} modules",
            polarity,
            bounds.width(),
            bounds.height(),
            bounds.min_x,
            bounds.min_y,
            finder_run,
            estimate
        );

        for size in nearest_sizes(estimate) {
            grids.push(ModuleGrid {
                left: bounds.min_x as f64,
                top: bounds.min_y as f64,
                pitch_x: bounds.width() as f64 / size as f64,
                pitch_y: bounds.height() as f64 / size as f64,
                size,
                polarity,
            });
        }
    }

    grids
}

fn ink_bounds(image: &LumaImage, polarity: Polarity) -> Option<InkBounds> {
    let mut bounds: Option<InkBounds> = None;
    for y in 0..image.height() {
        for x in 0..image.width() {
            if !image.is_ink(x, y, polarity) {
                continue;
            }
            bounds = Some(match bounds {
                None => InkBounds { min_x: x, min_y: y, max_x: x, max_y: y },
                Some(b) => InkBounds {
                    min_x: b.min_x.min(x),
                    min_y: b.min_y,
                    max_x: b.max_x.max(x),
                    max_y: y,
                },
            });
        }
    }
    bounds
}

/// Length of the first ink run just below the top edge of the ink box
///
/// Rows are probed a couple of pixels in so that a soft (resampled) edge
/// does not shorten the run.
fn finder_run(image: &LumaImage, bounds: &InkBounds, polarity: Polarity) -> Option<usize> {
    let probe_depth = (bounds.height() / 40).clamp(1, 4);
    let y = (bounds.min_y + probe_depth).min(bounds.max_y);

    let start = (bounds.min_x..=bounds.max_x).find(|&x| image.is_ink(x, y, polarity))?;
    let run = (start..=bounds.max_x)
        .take_while(|&x| image.is_ink(x, y, polarity))
        .count();
    (run > 0).then_some(run)
}

/// Valid symbol sizes ordered by distance from `estimate`
fn nearest_sizes(estimate: f64) -> Vec<usize> {
    let mut sizes: Vec<usize> = (Version::MIN.number()..=Version::MAX.number())
        .filter_map(Version::new)
        .map(|v| v.size())
        .collect();
    sizes.sort_by(|a, b| {
        let da = (*a as f64 - estimate).abs();
        let db = (*b as f64 - estimate).abs();
        da.total_cmp(&db)
    });
    sizes.truncate(SIZE_ATTEMPTS);
    sizes
}
