//! Line rasterization.
//!
//! Two algorithms: integer error-accumulation stepping for crisp 1px lines,
//! and Wu's algorithm for anti-aliased lines. Both draw functions return the
//! pixels they plotted so callers (the triangle fill) can reuse an edge as a
//! scanline boundary.

use crate::color::Rgba;
use crate::geometry::Point;
use crate::surface::Surface;

/// A pixel plotted by Wu's algorithm together with its coverage weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coverage {
    /// Pixel column.
    pub x: i32,
    /// Pixel row.
    pub y: i32,
    /// Fraction of the stroke alpha applied to this pixel, in `[0, 1]`.
    pub weight: f32,
}

impl Coverage {
    /// The pixel position.
    #[must_use]
    pub const fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Pixels visited by Bresenham's algorithm from `(x0, y0)` to `(x1, y1)`.
///
/// Exactly one pixel per step, endpoints included, in drawing order.
#[must_use]
pub fn bresenham_points(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<Point> {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut x = x0;
    let mut y = y0;
    let mut points = Vec::with_capacity(dx.max(-dy) as usize + 1);

    loop {
        points.push(Point::new(x, y));

        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            if x == x1 {
                break;
            }
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            if y == y1 {
                break;
            }
            err += dx;
            y += sy;
        }
    }

    points
}

/// Draw a line using Bresenham's algorithm (non-antialiased).
///
/// Returns the plotted pixels in drawing order.
pub fn draw_line<S: Surface>(
    surface: &mut S,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    color: Rgba,
) -> Vec<Point> {
    let points = bresenham_points(x0, y0, x1, y1);
    for p in &points {
        surface.put_pixel(p.x, p.y, color);
    }
    points
}

/// Coverage produced by Wu's algorithm, in plotting order.
///
/// Each step of the major axis yields the two pixels straddling the ideal
/// line; interior pairs carry weights `1 - frac(y)` and `frac(y)`, endpoint
/// pairs are further scaled by their horizontal gap. Zero-weight entries are
/// kept so every interior column sums to exactly one.
///
/// # References
///
/// Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.
#[must_use]
pub fn wu_coverage(x0: f32, y0: f32, x1: f32, y1: f32) -> Vec<Coverage> {
    let steep = (y1 - y0).abs() > (x1 - x0).abs();

    let (x0, y0, x1, y1) = if steep { (y0, x0, y1, x1) } else { (x0, y0, x1, y1) };

    let (x0, y0, x1, y1) = if x0 > x1 { (x1, y1, x0, y0) } else { (x0, y0, x1, y1) };

    let dx = x1 - x0;
    let dy = y1 - y0;
    let gradient = if dx.abs() < f32::EPSILON { 1.0 } else { dy / dx };

    let mut out = Vec::with_capacity((dx.abs() as usize + 2) * 2);
    let mut emit = |major: i32, minor: i32, weight: f32| {
        let (x, y) = if steep { (minor, major) } else { (major, minor) };
        out.push(Coverage { x, y, weight });
    };

    // First endpoint
    let xend = x0.round();
    let yend = y0 + gradient * (xend - x0);
    let xgap = rfpart(x0 + 0.5);
    let xpxl1 = xend as i32;
    let ypxl1 = yend.floor() as i32;
    emit(xpxl1, ypxl1, rfpart(yend) * xgap);
    emit(xpxl1, ypxl1 + 1, fpart(yend) * xgap);

    let mut intery = yend + gradient;

    // Second endpoint
    let xend = x1.round();
    let yend = y1 + gradient * (xend - x1);
    let xgap = fpart(x1 + 0.5);
    let xpxl2 = xend as i32;
    let ypxl2 = yend.floor() as i32;

    // Interior columns
    for x in (xpxl1 + 1)..xpxl2 {
        let ipart = intery.floor() as i32;
        emit(x, ipart, rfpart(intery));
        emit(x, ipart + 1, fpart(intery));
        intery += gradient;
    }

    emit(xpxl2, ypxl2, rfpart(yend) * xgap);
    emit(xpxl2, ypxl2 + 1, fpart(yend) * xgap);

    out
}

/// Draw an anti-aliased line using Wu's algorithm.
///
/// Each plotted pixel gets the stroke color with its alpha multiplied by the
/// pixel's coverage. Returns the pixels that received non-zero coverage.
pub fn draw_line_aa<S: Surface>(
    surface: &mut S,
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    color: Rgba,
) -> Vec<Point> {
    wu_coverage(x0, y0, x1, y1)
        .into_iter()
        .filter(|c| c.weight > 0.0)
        .map(|c| {
            surface.put_pixel(c.x, c.y, color.with_coverage(c.weight));
            c.point()
        })
        .collect()
}

/// Fractional part of a float.
#[inline]
fn fpart(x: f32) -> f32 {
    x - x.floor()
}

/// Reverse fractional part.
#[inline]
fn rfpart(x: f32) -> f32 {
    1.0 - fpart(x)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeMap;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        /// Wu coverage invariant: the straddling pair of every interior step
        /// sums to exactly one.
        #[test]
        fn prop_wu_interior_coverage_sums_to_one(
            x0 in 0i32..200, y0 in 0i32..200,
            x1 in 0i32..200, y1 in 0i32..200,
        ) {
            let (fx0, fy0, fx1, fy1) = (x0 as f32, y0 as f32, x1 as f32, y1 as f32);
            let steep = (fy1 - fy0).abs() > (fx1 - fx0).abs();
            let cov = wu_coverage(fx0, fy0, fx1, fy1);

            let mut sums: BTreeMap<i32, f32> = BTreeMap::new();
            for c in &cov {
                let major = if steep { c.y } else { c.x };
                *sums.entry(major).or_default() += c.weight;
            }

            let (lo, hi) = if steep {
                (y0.min(y1), y0.max(y1))
            } else {
                (x0.min(x1), x0.max(x1))
            };
            prop_assume!(hi > lo + 1);
            for (_, sum) in sums.range(lo + 1..hi) {
                prop_assert!((sum - 1.0).abs() < 1e-3, "column sum {}", sum);
            }
        }

        /// Every weight is a valid coverage fraction.
        #[test]
        fn prop_wu_weights_in_unit_range(
            x0 in -50.0f32..250.0, y0 in -50.0f32..250.0,
            x1 in -50.0f32..250.0, y1 in -50.0f32..250.0,
        ) {
            for c in wu_coverage(x0, y0, x1, y1) {
                prop_assert!((0.0..=1.0).contains(&c.weight), "weight {}", c.weight);
            }
        }

        /// Bresenham always connects its endpoints with 8-connected steps.
        #[test]
        fn prop_bresenham_connected(
            x0 in -100i32..100, y0 in -100i32..100,
            x1 in -100i32..100, y1 in -100i32..100,
        ) {
            let points = bresenham_points(x0, y0, x1, y1);
            prop_assert_eq!(points.first().copied(), Some(Point::new(x0, y0)));
            prop_assert_eq!(points.last().copied(), Some(Point::new(x1, y1)));
            for pair in points.windows(2) {
                prop_assert!((pair[1].x - pair[0].x).abs() <= 1);
                prop_assert!((pair[1].y - pair[0].y).abs() <= 1);
            }
        }
    }
}
