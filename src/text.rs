//! Text labels.
//!
//! Glyph rasterization lives behind [`TextRenderer`]; the canvas only measures
//! a string, resolves its anchor and asks the renderer to paint it. A
//! [`TextBox`] remembers where a label landed so UI code can hit-test it.

use crate::align::TextAlign;
use crate::color::Rgba;
use crate::geometry::{Point, Rect};
use crate::surface::Surface;

/// Measures and paints strings.
pub trait TextRenderer {
    /// Pixel size of `text` at `size`.
    fn measure(&mut self, text: &str, size: u32) -> (u32, u32);

    /// Paint `text` with its top-left corner at `origin`.
    fn render<S: Surface>(&mut self, surface: &mut S, text: &str, origin: Point, size: u32, color: Rgba);
}

/// An anchored label with alignment-aware hit testing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBox {
    /// Label contents.
    pub text: String,
    /// Anchor x.
    pub x: i32,
    /// Anchor y.
    pub y: i32,
    /// Measured width.
    pub w: i32,
    /// Measured height.
    pub h: i32,
    /// How the anchor relates to the box.
    pub align: TextAlign,
}

impl TextBox {
    /// Create a label box from an anchor and measured extent.
    pub fn new(text: impl Into<String>, x: i32, y: i32, w: i32, h: i32, align: TextAlign) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            w,
            h,
            align,
        }
    }

    /// The resolved top-left rectangle.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        self.align.resolve(self.x, self.y, self.w, self.h)
    }

    /// Whether `(mx, my)` lies on the label, edges included.
    #[must_use]
    pub const fn contains(&self, mx: i32, my: i32) -> bool {
        self.bounds().contains(Point::new(mx, my))
    }
}

/// Fixed-advance renderer that paints each glyph as a solid cell.
///
/// Stands in for a font backend where only layout matters: the demo scene,
/// tests and benchmarks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockText {
    /// Horizontal advance as a fraction of the size, in percent.
    pub advance_pct: u32,
}

impl Default for BlockText {
    fn default() -> Self {
        Self { advance_pct: 60 }
    }
}

impl BlockText {
    fn advance(self, size: u32) -> u32 {
        (size * self.advance_pct / 100).max(1)
    }
}

impl TextRenderer for BlockText {
    fn measure(&mut self, text: &str, size: u32) -> (u32, u32) {
        let chars = text.chars().count() as u32;
        (chars * self.advance(size), size)
    }

    fn render<S: Surface>(&mut self, surface: &mut S, text: &str, origin: Point, size: u32, color: Rgba) {
        let advance = self.advance(size) as i32;
        let cell_w = (advance - 1).max(1);
        let mut x = origin.x;
        for c in text.chars() {
            if !c.is_whitespace() {
                surface.fill_rect(x, origin.y, cell_w, size as i32, color);
            }
            x += advance;
        }
    }
}
