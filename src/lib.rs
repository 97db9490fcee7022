//! # Tile-Canvas
//!
//! Immediate-mode 2D software rasterizer for tile-based simulations.
//!
//! Shape requests (lines, triangles, circles, rounded rectangles, rhombi)
//! are turned into individually colored pixels with anti-aliasing and
//! written through a [`Surface`](surface::Surface). The bundled
//! [`Framebuffer`](framebuffer::Framebuffer) is an in-memory surface that can
//! be inspected pixel by pixel or saved as PNG.
//!
//! ## Features
//!
//! - **Pure Rust**: no windowing or GPU dependencies
//! - **Anti-aliased lines**: Wu's algorithm, or crisp Bresenham hairlines
//! - **Composable shapes**: circle quadrants and edge-suppressed triangles
//!   join into rounded rectangles and rhombi without doubled seams
//! - **Scoped styles**: [`Canvas::push_style`](canvas::Canvas::push_style)
//!   restores the render state when the guard is dropped
//!
//! ## Quick Start
//!
//! ```rust
//! use tile_canvas::prelude::*;
//!
//! let mut canvas = Canvas::new(Framebuffer::new(200, 120)?);
//! canvas.set_fill(Rgba::RED);
//! canvas.set_stroke(Rgba::BLACK);
//! canvas.rounded_rect(100, 60, 60, 40, 10, Align::Center)?;
//! canvas.circle(30, 30, 12, Align::Center, CircleQuad::All);
//!
//! let png = PngEncoder::to_bytes(canvas.surface())?;
//! assert!(!png.is_empty());
//! # Ok::<(), tile_canvas::Error>(())
//! ```
//!
//! ## References
//!
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in rasterization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color type and named constants.
pub mod color;

/// Integer pixel geometry.
pub mod geometry;

/// The pixel boundary rasterizers write through.
pub mod surface;

/// In-memory RGBA framebuffer.
pub mod framebuffer;

// ============================================================================
// Rasterization
// ============================================================================

/// Anchor resolution.
pub mod align;

/// Render state and scoped style overrides.
pub mod state;

/// Line, circle and triangle rasterizers.
pub mod render;

/// Rounded rectangles and rhombi.
pub mod compose;

/// The drawing context.
pub mod canvas;

// ============================================================================
// Boundaries and I/O
// ============================================================================

/// Sprite images.
pub mod sprite;

/// Text labels.
pub mod text;

/// YAML configuration.
pub mod config;

/// PNG snapshots and decoding.
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for canvas operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use tile_canvas::prelude::*;
/// ```
pub mod prelude {
    pub use crate::align::{Align, TextAlign};
    pub use crate::canvas::Canvas;
    pub use crate::color::Rgba;
    pub use crate::config::CanvasConfig;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Point, Rect};
    pub use crate::output::PngEncoder;
    pub use crate::render::{CircleQuad, TrigQuad};
    pub use crate::sprite::{ImageSource, SpriteCache};
    pub use crate::state::{LineMode, RenderState};
    pub use crate::surface::Surface;
    pub use crate::text::{BlockText, TextBox, TextRenderer};
}
