//! Color type used by every primitive.
//!
//! Colors carry straight (non-premultiplied) alpha. Rasterizers never blend
//! themselves: they scale the alpha channel to express coverage and hand the
//! result to the [`Surface`](crate::surface::Surface), which composites it
//! over existing content.

use serde::{Deserialize, Serialize};

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[u8; 4]", into = "[u8; 4]")]
#[repr(C)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// Opaque green.
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    /// Opaque blue.
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    /// HUD yellow.
    pub const YELLOW: Self = Self::rgb(255, 239, 0);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create a color with modified alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Divide the alpha channel by an integer fraction (integer division).
    ///
    /// Used for the reduced-alpha bands of the circle rasterizer and the
    /// softened seams of rounded rectangles.
    #[must_use]
    pub const fn fade(self, divisor: u8) -> Self {
        if divisor == 0 {
            return self;
        }
        self.with_alpha(self.a / divisor)
    }

    /// Scale the alpha channel by a coverage weight in `[0, 1]`.
    #[must_use]
    pub fn with_coverage(self, coverage: f32) -> Self {
        let coverage = coverage.clamp(0.0, 1.0);
        self.with_alpha((f32::from(self.a) * coverage).round() as u8)
    }

    /// Whether this color leaves the surface untouched when blended.
    #[must_use]
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }
}

impl From<[u8; 4]> for Rgba {
    fn from(arr: [u8; 4]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Rgba> for [u8; 4] {
    fn from(color: Rgba) -> Self {
        color.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_constants() {
        assert_eq!(Rgba::BLACK, Rgba::new(0, 0, 0, 255));
        assert_eq!(Rgba::WHITE, Rgba::new(255, 255, 255, 255));
        assert_eq!(Rgba::RED.r, 255);
        assert_eq!(Rgba::GREEN.g, 255);
        assert_eq!(Rgba::BLUE.b, 255);
        assert_eq!(Rgba::TRANSPARENT.a, 0);
    }

    #[test]
    fn test_fade() {
        let black = Rgba::BLACK;
        assert_eq!(black.fade(2).a, 127);
        assert_eq!(black.fade(3).a, 85);
        assert_eq!(black.fade(0), black);
        assert_eq!(black.fade(2).r, 0);
    }

    #[test]
    fn test_with_coverage() {
        let red = Rgba::RED;
        assert_eq!(red.with_coverage(1.0), red);
        assert_eq!(red.with_coverage(0.0).a, 0);
        assert_eq!(red.with_coverage(0.5).a, 128);
        // Out-of-range weights are clamped
        assert_eq!(red.with_coverage(2.0), red);
        assert_eq!(red.with_coverage(-1.0).a, 0);
    }

    #[test]
    fn test_rgba_to_array_from_array() {
        let color = Rgba::new(10, 20, 30, 40);
        let arr: [u8; 4] = color.into();
        assert_eq!(arr, [10, 20, 30, 40]);
        assert_eq!(Rgba::from(arr), color);
    }

    #[test]
    fn test_rgba_default_is_transparent() {
        assert!(Rgba::default().is_transparent());
    }
}
