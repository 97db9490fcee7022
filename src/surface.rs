//! The pixel boundary every rasterizer writes through.

use crate::color::Rgba;

/// A pixel-settable canvas.
///
/// Implementors composite each incoming color over existing content using
/// straight alpha ("over"). Coordinates outside the surface are ignored, so
/// rasterizers may emit off-canvas pixels without clipping first.
pub trait Surface {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Blend `color` onto the pixel at `(x, y)`.
    fn put_pixel(&mut self, x: i32, y: i32, color: Rgba);

    /// Blend `color` onto every pixel of a `w`x`h` rectangle at `(x, y)`.
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgba) {
        if color.is_transparent() {
            return;
        }
        for py in y..y + h {
            for px in x..x + w {
                self.put_pixel(px, py, color);
            }
        }
    }
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn put_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        (**self).put_pixel(x, y, color);
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgba) {
        (**self).fill_rect(x, y, w, h, color);
    }
}
