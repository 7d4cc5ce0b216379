use crate::error::{IconError, Result};

/// Inclusive pixel rectangle: both corners are painted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// Left column
    pub x0: i64,
    /// Top row
    pub y0: i64,
    /// Right column (inclusive)
    pub x1: i64,
    /// Bottom row (inclusive)
    pub y1: i64,
}

/// Pixel span of a rectangle after clipping, end-exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// First painted column
    pub x_start: u32,
    /// First painted row
    pub y_start: u32,
    /// One past the last painted column
    pub x_end: u32,
    /// One past the last painted row
    pub y_end: u32,
}

impl Rect {
    /// Rectangle from `[x0, y0, x1, y1]`; fails when the corners are reversed
    pub fn new(x0: i64, y0: i64, x1: i64, y1: i64) -> Result<Self> {
        if x1 < x0 || y1 < y0 {
            return Err(IconError::InvalidGeometry(format!(
                "rectangle [{x0}, {y0}, {x1}, {y1}] has reversed corners"
            )));
        }
        Ok(Self { x0, y0, x1, y1 })
    }

    /// Square with top-left corner at `(x, y)` spanning to `(x + side, y + side)`
    pub fn square(x: i64, y: i64, side: i64) -> Result<Self> {
        Self::new(x, y, x + side, y + side)
    }

    /// Shrink by `amount` on every side
    pub fn inset(&self, amount: i64) -> Result<Self> {
        Self::new(
            self.x0 + amount,
            self.y0 + amount,
            self.x1 - amount,
            self.y1 - amount,
        )
    }

    /// Grow by `amount` on every side
    pub fn outset(&self, amount: i64) -> Result<Self> {
        self.inset(-amount)
    }

    /// Painted width in pixels
    pub fn width(&self) -> i64 {
        self.x1 - self.x0 + 1
    }

    /// Painted height in pixels
    pub fn height(&self) -> i64 {
        self.y1 - self.y0 + 1
    }

    /// Whether pixel `(x, y)` lies inside
    pub fn contains(&self, x: i64, y: i64) -> bool {
        (self.x0..=self.x1).contains(&x) && (self.y0..=self.y1).contains(&y)
    }

    /// Clip to a `width` x `height` canvas, `None` when nothing is visible
    pub fn clip(&self, width: u32, height: u32) -> Option<Span> {
        let x_start = self.x0.max(0);
        let y_start = self.y0.max(0);
        let x_end = (self.x1 + 1).min(width as i64);
        let y_end = (self.y1 + 1).min(height as i64);
        if x_start >= x_end || y_start >= y_end {
            return None;
        }
        Some(Span {
            x_start: x_start as u32,
            y_start: y_start as u32,
            x_end: x_end as u32,
            y_end: y_end as u32,
        })
    }
}
