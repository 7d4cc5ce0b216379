//! Raster canvas and 2D drawing primitives
//!
//! - Canvas allocation (solid or transparent) and PNG serialization
//! - Inclusive rectangles and rounded rectangles, clipped to the canvas
//! - Alpha-stencilled compositing of one raster onto another
//! - Lanczos resampling

/// Canvas type and draw calls
pub mod canvas;
/// Colour literal parsing
pub mod color;
/// Resampling filters
pub mod resample;
/// Rectangle geometry and clipping
pub mod shapes;

pub use canvas::{Canvas, CanvasMode};
pub use color::{opaque, parse_hex_color};
pub use shapes::Rect;
