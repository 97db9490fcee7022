//! Composite shapes built from simpler primitives.
//!
//! A composite is decomposed into a list of [`Primitive`]s that carry every
//! color and mode they need, so executing them never touches the caller's
//! render state. The canvas draws the list in order.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::{Point, Rect};
use crate::render::{draw_circle, draw_line, draw_triangle, CircleQuad, TrigQuad};
use crate::state::{LineMode, RenderState};
use crate::surface::Surface;

/// A single self-contained drawing instruction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    /// Filled rectangle with an inward outline `weight` pixels wide.
    Rect {
        /// Target rectangle.
        rect: Rect,
        /// Interior color.
        fill: Rgba,
        /// Outline color.
        stroke: Rgba,
        /// Outline width.
        weight: u32,
    },
    /// Circle or circle quadrant with a banded ring.
    Circle {
        /// Center pixel.
        center: Point,
        /// Radius to the middle of the ring.
        radius: i32,
        /// Interior color.
        fill: Rgba,
        /// Ring color.
        stroke: Rgba,
        /// Ring width.
        weight: u32,
        /// Portion drawn.
        quad: CircleQuad,
    },
    /// Aliased hairline.
    Line {
        /// Start pixel.
        from: Point,
        /// End pixel.
        to: Point,
        /// Line color.
        color: Rgba,
    },
    /// Filled triangle with optional edge suppression.
    Triangle {
        /// Vertices in any order.
        vertices: [Point; 3],
        /// Interior color.
        fill: Rgba,
        /// Edge color.
        stroke: Rgba,
        /// Edge algorithm.
        mode: LineMode,
        /// Edge left unstroked.
        suppress: TrigQuad,
    },
}

impl Primitive {
    /// Rasterize onto a surface.
    pub fn draw<S: Surface>(&self, surface: &mut S) {
        match *self {
            Self::Rect {
                rect,
                fill,
                stroke,
                weight,
            } => draw_rect(surface, rect, fill, stroke, weight),
            Self::Circle {
                center,
                radius,
                fill,
                stroke,
                weight,
                quad,
            } => {
                draw_circle(surface, center.x, center.y, radius, fill, stroke, weight, quad);
            }
            Self::Line { from, to, color } => {
                draw_line(surface, from.x, from.y, to.x, to.y, color);
            }
            Self::Triangle {
                vertices,
                fill,
                stroke,
                mode,
                suppress,
            } => {
                draw_triangle(surface, vertices, fill, stroke, mode, suppress);
            }
        }
    }
}

/// Fill a rectangle, then stroke its border pixels inward.
///
/// Border strips never overlap, so a translucent stroke is blended once per
/// pixel. When the outline is as thick as the rectangle the whole rectangle
/// takes the stroke color.
pub fn draw_rect<S: Surface>(surface: &mut S, rect: Rect, fill: Rgba, stroke: Rgba, weight: u32) {
    if rect.is_empty() {
        return;
    }
    let Rect { x, y, w, h } = rect;
    surface.fill_rect(x, y, w, h, fill);

    let t = weight.max(1) as i32;
    if 2 * t >= w || 2 * t >= h {
        surface.fill_rect(x, y, w, h, stroke);
        return;
    }
    surface.fill_rect(x, y, w, t, stroke);
    surface.fill_rect(x, y + h - t, w, t, stroke);
    surface.fill_rect(x, y + t, t, h - 2 * t, stroke);
    surface.fill_rect(x + w - t, y + t, t, h - 2 * t, stroke);
}

/// Decompose a rounded rectangle.
///
/// `rect` is the resolved top-left rectangle. Corner arcs have radius
/// `radius + 1` and are centered at the corners inset by `radius`; the flat
/// border runs one pixel outside the fill, matching where the arcs' rings
/// land. Each flat border gets a second line one pixel inward at a third of
/// the stroke alpha, the same fade the arcs use on their inner edge.
///
/// The fills and corner quadrants partition the interior: the left arcs own
/// the column through their centers and the top arcs own the row through
/// theirs, so a translucent fill is blended once everywhere.
///
/// A zero radius decomposes into a single plain rectangle.
///
/// # Errors
///
/// Returns [`Error::InvalidGeometry`] when `radius` is negative or exceeds
/// half the width or height.
pub fn rounded_rect(rect: Rect, radius: i32, state: &RenderState) -> Result<Vec<Primitive>> {
    let Rect { x, y, w, h } = rect;
    if radius < 0 || radius > w / 2 || radius > h / 2 {
        return Err(Error::InvalidGeometry { radius, width: w, height: h });
    }

    let RenderState { fill, stroke, stroke_weight: weight, .. } = *state;

    if radius == 0 {
        return Ok(vec![Primitive::Rect { rect, fill, stroke, weight }]);
    }

    let r = radius;
    let left = x + r;
    let right = x + w - r;
    let top = y + r;
    let bottom = y + h - r;

    // Center column plus two side strips, all unstroked
    let mut prims: Vec<Primitive> = [
        Rect::new(left + 1, y, w - 2 * r, h + 1),
        Rect::new(x, top + 1, r + 1, h - 2 * r),
        Rect::new(right + 1, top + 1, r, h - 2 * r),
    ]
    .into_iter()
    .map(|rect| Primitive::Rect {
        rect,
        fill,
        stroke: Rgba::TRANSPARENT,
        weight,
    })
    .collect();

    for (cx, cy, quad) in [
        (left, top, CircleQuad::TopLeft),
        (right, top, CircleQuad::TopRight),
        (left, bottom, CircleQuad::BottomLeft),
        (right, bottom, CircleQuad::BottomRight),
    ] {
        prims.push(Primitive::Circle {
            center: Point::new(cx, cy),
            radius: r + 1,
            fill,
            stroke,
            weight,
            quad,
        });
    }

    let line = |x0, y0, x1, y1, color| Primitive::Line {
        from: Point::new(x0, y0),
        to: Point::new(x1, y1),
        color,
    };

    for k in 0..weight.max(1) as i32 {
        prims.push(line(left + 1, y - 1 - k, right, y - 1 - k, stroke));
        prims.push(line(left + 1, y + h + 1 + k, right, y + h + 1 + k, stroke));
        prims.push(line(x - 1 - k, top + 1, x - 1 - k, bottom, stroke));
        prims.push(line(x + w + 1 + k, top + 1, x + w + 1 + k, bottom, stroke));
    }

    let soft = stroke.fade(3);
    prims.push(line(left + 1, y, right, y, soft));
    prims.push(line(left + 1, y + h, right, y + h, soft));
    prims.push(line(x, top + 1, x, bottom, soft));
    prims.push(line(x + w, top + 1, x + w, bottom, soft));

    log::debug!("rounded rect {rect:?} r={radius}: {} primitives", prims.len());
    Ok(prims)
}

/// Decompose a rhombus centered on `center`.
///
/// Two triangles share the vertical edge through the center; both suppress
/// that edge so the diamond reads as one shape.
#[must_use]
pub fn rhombus(center: Point, w: i32, h: i32, state: &RenderState) -> Vec<Primitive> {
    let Point { x, y } = center;
    let apex = Point::new(x, y - h / 2);
    let base = Point::new(x, y + h / 2);

    let prims: Vec<Primitive> = [Point::new(x - w / 2, y), Point::new(x + w / 2, y)]
        .into_iter()
        .map(|side| Primitive::Triangle {
            vertices: [side, apex, base],
            fill: state.fill,
            stroke: state.stroke,
            mode: state.line_mode,
            suppress: TrigQuad::Middle,
        })
        .collect();

    log::debug!("rhombus at {center:?} {w}x{h}: {} primitives", prims.len());
    prims
}
