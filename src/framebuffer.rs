//! Core framebuffer for pixel rendering.
//!
//! Provides an aligned RGBA pixel buffer. It is the in-memory [`Surface`]
//! that the rasterizers draw into and that tests inspect pixel-by-pixel.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::surface::Surface;

/// Row alignment in bytes (64 bytes, one cache line).
const ROW_ALIGNMENT: usize = 64;

/// Row-aligned RGBA framebuffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// RGBA pixels in row-major order.
    /// Each pixel is 4 bytes: [R, G, B, A].
    pixels: Vec<u8>,
    /// Stride in bytes (may include padding for alignment).
    stride: usize,
}

impl Framebuffer {
    /// Create a new, fully transparent framebuffer with the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use tile_canvas::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(800, 600).unwrap();
    /// assert_eq!(fb.width(), 800);
    /// assert_eq!(fb.height(), 600);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        // Calculate stride with alignment padding
        let row_bytes = (width as usize) * 4;
        let stride = (row_bytes + ROW_ALIGNMENT - 1) & !(ROW_ALIGNMENT - 1);

        let pixels = vec![0; stride * (height as usize)];

        Ok(Self {
            width,
            height,
            pixels,
            stride,
        })
    }

    /// Create a framebuffer from tightly packed RGBA bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension is zero or `data` is not exactly
    /// `width * height * 4` bytes long.
    pub fn from_rgba(width: u32, height: u32, data: &[u8]) -> Result<Self> {
        let mut fb = Self::new(width, height)?;
        let row_bytes = (width as usize) * 4;
        if data.len() != row_bytes * (height as usize) {
            return Err(Error::InvalidDimensions { width, height });
        }

        for (y, src) in data.chunks_exact(row_bytes).enumerate() {
            let start = y * fb.stride;
            fb.pixels[start..start + row_bytes].copy_from_slice(src);
        }
        Ok(fb)
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get a row of pixels as a slice.
    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * self.stride;
        let end = start + (self.width as usize) * 4;
        Some(&self.pixels[start..end])
    }

    /// Clear the framebuffer to a solid color, overwriting existing content.
    pub fn clear(&mut self, color: Rgba) {
        let rgba = color.to_array();
        let row_bytes = (self.width as usize) * 4;

        for y in 0..self.height as usize {
            let row_start = y * self.stride;
            for chunk in self.pixels[row_start..row_start + row_bytes].chunks_exact_mut(4) {
                chunk.copy_from_slice(&rgba);
            }
        }
    }

    /// Get the color at a specific pixel coordinate.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let idx = self.pixel_index(x, y);
        Some(Rgba::from_array([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]))
    }

    /// Set the color at a specific pixel coordinate without blending.
    ///
    /// Does nothing if the coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }

        let idx = self.pixel_index(x, y);
        self.pixels[idx..idx + 4].copy_from_slice(&color.to_array());
    }

    /// Blend a color at a specific pixel coordinate using alpha blending.
    ///
    /// Uses the standard "over" compositing operation:
    /// `out = src * src_alpha + dst * dst_alpha * (1 - src_alpha)`
    pub fn blend_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height || color.is_transparent() {
            return;
        }
        if color.a == 255 {
            self.set_pixel(x, y, color);
            return;
        }

        let idx = self.pixel_index(x, y);
        let src_a = f32::from(color.a) / 255.0;
        let dst_a = f32::from(self.pixels[idx + 3]) / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);

        let blend = |src: u8, dst: u8| -> u8 {
            let src_f = f32::from(src) / 255.0;
            let dst_f = f32::from(dst) / 255.0;
            let out = (src_f * src_a + dst_f * dst_a * (1.0 - src_a)) / out_a;
            (out * 255.0).round().clamp(0.0, 255.0) as u8
        };

        self.pixels[idx] = blend(color.r, self.pixels[idx]);
        self.pixels[idx + 1] = blend(color.g, self.pixels[idx + 1]);
        self.pixels[idx + 2] = blend(color.b, self.pixels[idx + 2]);
        self.pixels[idx + 3] = (out_a * 255.0).round() as u8;
    }

    /// Count the pixels whose color satisfies `pred`.
    #[must_use]
    pub fn count_pixels(&self, pred: impl Fn(Rgba) -> bool) -> usize {
        (0..self.height)
            .filter_map(|y| self.row(y))
            .flat_map(|row| row.chunks_exact(4))
            .filter(|c| pred(Rgba::from_array([c[0], c[1], c[2], c[3]])))
            .count()
    }

    /// Calculate the byte index for a pixel coordinate.
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * self.stride + (x as usize) * 4
    }

    /// Get pixel data as a compact buffer without stride padding.
    ///
    /// This is useful for encoding to formats like PNG that expect
    /// tightly-packed pixel data.
    #[must_use]
    pub fn to_compact_pixels(&self) -> Vec<u8> {
        let row_bytes = (self.width as usize) * 4;

        if self.stride == row_bytes {
            return self.pixels[..row_bytes * (self.height as usize)].to_vec();
        }

        let mut compact = Vec::with_capacity(row_bytes * (self.height as usize));
        for y in 0..self.height {
            let start = (y as usize) * self.stride;
            compact.extend_from_slice(&self.pixels[start..start + row_bytes]);
        }
        compact
    }
}

impl Surface for Framebuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn put_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        if x < 0 || y < 0 {
            return;
        }
        self.blend_pixel(x as u32, y as u32, color);
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgba) {
        if color.is_transparent() {
            return;
        }

        // Clamp to framebuffer bounds
        let x1 = x.max(0);
        let y1 = y.max(0);
        let x2 = x.saturating_add(w).min(self.width as i32);
        let y2 = y.saturating_add(h).min(self.height as i32);

        for py in y1..y2 {
            for px in x1..x2 {
                self.blend_pixel(px as u32, py as u32, color);
            }
        }
    }
}
