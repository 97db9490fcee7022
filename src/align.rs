//! Anchor resolution.
//!
//! Every shape and image call carries an anchor point, an extent and an
//! alignment tag. The resolver turns that triple into the top-left-origin
//! rectangle the rasterizers work with.

use crate::error::{Error, Result};
use crate::geometry::Rect;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Anchor semantics for shapes and images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    /// `(x, y)` is the top-left corner.
    #[default]
    Left,
    /// `(x, y)` is the center.
    Center,
    /// `(x, y)` is the top-right corner.
    Right,
}

/// Anchor semantics for text labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    /// `(x, y)` is the top-left corner.
    #[default]
    Corners,
    /// `(x, y)` is the middle of the left edge.
    CenterLeft,
    /// `(x, y)` is the center.
    Center,
    /// `(x, y)` is the middle of the right edge.
    CenterRight,
}

/// Resolve an anchor, extent and alignment into a top-left rectangle.
///
/// Half extents use integer division, so odd sizes lean toward the anchor.
///
/// # Example
///
/// ```
/// use tile_canvas::align::{resolve, Align};
/// use tile_canvas::geometry::Rect;
///
/// assert_eq!(resolve(100, 100, 60, 40, Align::Center), Rect::new(70, 80, 60, 40));
/// ```
#[must_use]
pub const fn resolve(x: i32, y: i32, w: i32, h: i32, align: Align) -> Rect {
    match align {
        Align::Left => Rect::new(x, y, w, h),
        Align::Center => Rect::new(x - w / 2, y - h / 2, w, h),
        Align::Right => Rect::new(x - w, y, w, h),
    }
}

/// Resolve a text anchor: only the horizontal axis depends on alignment.
///
/// The vertical anchor passes through unchanged, so a line of text keeps its
/// baseline row whatever its horizontal alignment.
#[must_use]
pub const fn resolve_text(x: i32, y: i32, w: i32, h: i32, align: Align) -> Rect {
    match align {
        Align::Left => Rect::new(x, y, w, h),
        Align::Center => Rect::new(x - w / 2, y, w, h),
        Align::Right => Rect::new(x - w, y, w, h),
    }
}

impl TextAlign {
    /// Resolve an anchor and extent into a top-left rectangle.
    #[must_use]
    pub const fn resolve(self, x: i32, y: i32, w: i32, h: i32) -> Rect {
        match self {
            Self::Corners => Rect::new(x, y, w, h),
            Self::CenterLeft => Rect::new(x, y - h / 2, w, h),
            Self::Center => Rect::new(x - w / 2, y - h / 2, w, h),
            Self::CenterRight => Rect::new(x - w, y - h / 2, w, h),
        }
    }
}

impl FromStr for Align {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "corners" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            _ => Err(Error::UnhandledAlignment(s.to_string())),
        }
    }
}

impl FromStr for TextAlign {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "corners" => Ok(Self::Corners),
            "center_left" => Ok(Self::CenterLeft),
            "center" => Ok(Self::Center),
            "center_right" => Ok(Self::CenterRight),
            _ => Err(Error::UnhandledAlignment(s.to_string())),
        }
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        })
    }
}

impl fmt::Display for TextAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Corners => "corners",
            Self::CenterLeft => "center_left",
            Self::Center => "center",
            Self::CenterRight => "center_right",
        })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::geometry::Point;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        /// Resolution never changes the extent.
        #[test]
        fn prop_extent_preserved(
            x in -1000i32..1000, y in -1000i32..1000,
            w in 0i32..500, h in 0i32..500,
        ) {
            for align in [Align::Left, Align::Center, Align::Right] {
                let rect = resolve(x, y, w, h, align);
                prop_assert_eq!((rect.w, rect.h), (w, h));
            }
        }

        /// The anchor always lies on or inside the resolved rectangle.
        #[test]
        fn prop_anchor_inside(
            x in -1000i32..1000, y in -1000i32..1000,
            w in 0i32..500, h in 0i32..500,
        ) {
            for align in [Align::Left, Align::Center, Align::Right] {
                prop_assert!(resolve(x, y, w, h, align).contains(Point::new(x, y)));
            }
        }
    }
}
