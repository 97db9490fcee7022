//! Software rasterization.
//!
//! Turns shape requests into colored pixels written through a [`Surface`].
//!
//! # Algorithms
//!
//! - **Wu's Anti-aliased Line**: sub-pixel coverage blending
//! - **Bresenham's Line**: integer stepping, one opaque pixel per step
//! - **Banded Circle**: signed-distance bands for fill, ring and fringe
//! - **Scanline Triangle**: edge traces as row boundaries, per-edge suppression
//!
//! # References
//!
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//!
//! [`Surface`]: crate::surface::Surface

mod circle;
mod line;
mod triangle;

pub use circle::{classify, draw_circle, quadrant_bounds, Band, CircleQuad};
pub use line::{bresenham_points, draw_line, draw_line_aa, wu_coverage, Coverage};
pub use triangle::{draw_triangle, TrigQuad};
