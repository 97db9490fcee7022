//! Scanline triangle fill with selectable edge suppression.
//!
//! Edges are traced with the integer line stepper; the traces give a left and
//! a right boundary for every row. Rows strictly between the top and bottom
//! vertex are filled between those boundaries, then the visible edges are
//! stroked on top. A suppressed edge is not stroked and its boundary pixels
//! are filled instead, so two triangles can share an edge with no seam.
//! Anti-aliased strokes are clipped to the near side of a suppressed edge so
//! their fringe never lands on the shared seam.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::render::line::{bresenham_points, draw_line, wu_coverage};
use crate::state::LineMode;
use crate::surface::Surface;
use std::collections::HashSet;
use std::str::FromStr;

/// Which triangle edge is left unstroked.
///
/// Edges are named after the vertex order used by the rasterizer: vertices
/// are sorted by ascending y, so `Top` is edge 0-1, `Middle` is edge 0-2 (top
/// to bottom vertex) and `Bottom` is edge 1-2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TrigQuad {
    /// Stroke every edge.
    #[default]
    All,
    /// Suppress edge 0-1.
    Top,
    /// Suppress edge 0-2.
    Middle,
    /// Suppress edge 1-2.
    Bottom,
}

impl TrigQuad {
    /// Whether the edge with the given role is suppressed.
    #[must_use]
    pub const fn suppresses(self, edge: TrigQuad) -> bool {
        !matches!(self, Self::All) && self as u8 == edge as u8
    }
}

impl FromStr for TrigQuad {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "top" => Ok(Self::Top),
            "middle" => Ok(Self::Middle),
            "bottom" => Ok(Self::Bottom),
            _ => Err(Error::UnhandledQuadrant(s.to_string())),
        }
    }
}

/// One edge of the triangle in rasterizer order.
#[derive(Debug, Clone, Copy)]
struct Edge {
    from: Point,
    to: Point,
    opposite: Point,
    role: TrigQuad,
}

/// Sort by ascending y, then break a knife-edge top by swapping vertices 1 and 2.
fn order_vertices(mut v: [Point; 3]) -> [Point; 3] {
    if v[0].y > v[1].y {
        v.swap(0, 1);
    }
    if v[1].y > v[2].y {
        v.swap(1, 2);
    }
    if v[0].y > v[1].y {
        v.swap(0, 1);
    }
    if v[0].x == v[1].x {
        v.swap(1, 2);
    }
    v
}

fn edges(v: [Point; 3]) -> [Edge; 3] {
    [
        Edge {
            from: v[0],
            to: v[1],
            opposite: v[2],
            role: TrigQuad::Top,
        },
        Edge {
            from: v[0],
            to: v[2],
            opposite: v[1],
            role: TrigQuad::Middle,
        },
        Edge {
            from: v[1],
            to: v[2],
            opposite: v[0],
            role: TrigQuad::Bottom,
        },
    ]
}

/// Region an anti-aliased stroke may not touch: the interior pixels of a
/// suppressed edge's trace and, within the edge's span, everything on the far
/// side of it.
struct SeamClip {
    from: Point,
    to: Point,
    inward: i64,
    trace: HashSet<Point>,
}

impl SeamClip {
    fn new(edge: Edge) -> Self {
        let trace = bresenham_points(edge.from.x, edge.from.y, edge.to.x, edge.to.y)
            .into_iter()
            .filter(|&p| p != edge.from && p != edge.to)
            .collect();
        let mut clip = Self {
            from: edge.from,
            to: edge.to,
            inward: 0,
            trace,
        };
        clip.inward = clip.side(edge.opposite).signum();
        clip
    }

    /// Cross product of the edge direction with `p`; the sign gives the side.
    fn side(&self, p: Point) -> i64 {
        let (a, b) = (self.from, self.to);
        i64::from(b.x - a.x) * i64::from(p.y - a.y) - i64::from(b.y - a.y) * i64::from(p.x - a.x)
    }

    /// Strictly between the endpoints along the edge's major axis.
    fn within_span(&self, p: Point) -> bool {
        let (a, b) = (self.from, self.to);
        if (b.y - a.y).abs() >= (b.x - a.x).abs() {
            p.y > a.y.min(b.y) && p.y < a.y.max(b.y)
        } else {
            p.x > a.x.min(b.x) && p.x < a.x.max(b.x)
        }
    }

    fn hides(&self, p: Point) -> bool {
        self.trace.contains(&p) || (self.within_span(p) && self.side(p) * self.inward < 0)
    }
}

/// Per-row boundary: the outermost traced x and whether every edge reaching
/// it is suppressed.
type Boundary = Vec<Option<(i32, bool)>>;

fn widen(
    boundary: &mut Boundary,
    row: usize,
    x: i32,
    suppressed: bool,
    outer: fn(i32, i32) -> bool,
) {
    let slot = &mut boundary[row];
    *slot = match *slot {
        None => Some((x, suppressed)),
        Some((bx, _)) if outer(x, bx) => Some((x, suppressed)),
        Some((bx, bs)) if bx == x => Some((bx, bs && suppressed)),
        keep => keep,
    };
}

/// Fill the interior rows of a triangle.
fn fill_interior<S: Surface>(surface: &mut S, v: [Point; 3], fill: Rgba, suppress: TrigQuad) {
    let mut sorted = v;
    sorted.sort_by_key(|p| p.y);
    let [top, mid, bottom] = sorted;

    if bottom.y - top.y < 2 {
        return;
    }
    let cross = (bottom.x - top.x) * (mid.y - top.y) - (bottom.y - top.y) * (mid.x - top.x);
    if cross == 0 {
        return;
    }
    let mid_on_left = cross > 0;

    let rows = (bottom.y - top.y + 1) as usize;
    let mut left: Boundary = vec![None; rows];
    let mut right: Boundary = vec![None; rows];

    for edge in edges(v) {
        let long = (edge.from == top && edge.to == bottom)
            || (edge.from == bottom && edge.to == top);
        let on_left = if long { !mid_on_left } else { mid_on_left };
        let suppressed = suppress.suppresses(edge.role);

        for p in bresenham_points(edge.from.x, edge.from.y, edge.to.x, edge.to.y) {
            let row = (p.y - top.y) as usize;
            if on_left {
                widen(&mut left, row, p.x, suppressed, |a, b| a < b);
            } else {
                widen(&mut right, row, p.x, suppressed, |a, b| a > b);
            }
        }
    }

    for row in 1..rows - 1 {
        let (Some((lx, l_open)), Some((rx, r_open))) = (left[row], right[row]) else {
            continue;
        };
        let start = if l_open { lx } else { lx + 1 };
        let end = if r_open { rx } else { rx - 1 };
        let y = top.y + row as i32;
        for x in start..=end {
            surface.put_pixel(x, y, fill);
        }
    }
}

/// Draw a filled triangle and stroke its unsuppressed edges.
///
/// The fill is written first; strokes are drawn on top with the requested
/// line algorithm. Collinear or flat triangles produce strokes only.
pub fn draw_triangle<S: Surface>(
    surface: &mut S,
    vertices: [Point; 3],
    fill: Rgba,
    stroke: Rgba,
    mode: LineMode,
    suppress: TrigQuad,
) {
    log::trace!("triangle {vertices:?} suppress={suppress:?}");

    let v = order_vertices(vertices);
    fill_interior(surface, v, fill, suppress);

    let clip = edges(v)
        .into_iter()
        .find(|e| suppress.suppresses(e.role))
        .map(SeamClip::new);

    for edge in edges(v) {
        if suppress.suppresses(edge.role) {
            continue;
        }
        let (a, b) = (edge.from, edge.to);
        match mode {
            LineMode::Aliased => {
                draw_line(surface, a.x, a.y, b.x, b.y, stroke);
            }
            LineMode::Antialiased => {
                for c in wu_coverage(a.x as f32, a.y as f32, b.x as f32, b.y as f32) {
                    if c.weight > 0.0 && !clip.as_ref().is_some_and(|k| k.hides(c.point())) {
                        surface.put_pixel(c.x, c.y, stroke.with_coverage(c.weight));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::Framebuffer;

    fn white_fb() -> Framebuffer {
        let mut fb = Framebuffer::new(64, 64).expect("framebuffer creation should succeed");
        fb.clear(Rgba::WHITE);
        fb
    }

    fn right_triangle() -> [Point; 3] {
        [Point::new(10, 10), Point::new(30, 10), Point::new(10, 30)]
    }

    #[test]
    fn test_order_vertices_sorts_by_y() {
        let v = order_vertices([Point::new(5, 20), Point::new(0, 10), Point::new(9, 0)]);
        assert_eq!(v, [Point::new(9, 0), Point::new(0, 10), Point::new(5, 20)]);
    }

    #[test]
    fn test_order_vertices_knife_edge_swap() {
        let v = order_vertices([Point::new(0, 0), Point::new(0, 5), Point::new(10, 10)]);
        assert_eq!(v, [Point::new(0, 0), Point::new(10, 10), Point::new(0, 5)]);
    }

    #[test]
    fn test_suppresses() {
        assert!(TrigQuad::Middle.suppresses(TrigQuad::Middle));
        assert!(!TrigQuad::Middle.suppresses(TrigQuad::Top));
        assert!(!TrigQuad::All.suppresses(TrigQuad::All));
        assert!(!TrigQuad::All.suppresses(TrigQuad::Bottom));
    }

    #[test]
    fn test_filled_and_stroked() {
        let mut fb = white_fb();
        draw_triangle(
            &mut fb,
            right_triangle(),
            Rgba::RED,
            Rgba::BLACK,
            LineMode::Aliased,
            TrigQuad::All,
        );

        assert_eq!(fb.get_pixel(15, 15), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(11, 28), Some(Rgba::RED));
        // Edges
        assert_eq!(fb.get_pixel(10, 20), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(20, 10), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(20, 20), Some(Rgba::BLACK));
        // Outside the hypotenuse
        assert_eq!(fb.get_pixel(28, 28), Some(Rgba::WHITE));
        assert_eq!(fb.get_pixel(9, 20), Some(Rgba::WHITE));
    }

    #[test]
    fn test_suppressed_edge_is_filled_not_stroked() {
        let mut fb = white_fb();
        // Edge 0-2 runs from the top vertex to the bottom vertex: the x = 10 side
        draw_triangle(
            &mut fb,
            right_triangle(),
            Rgba::RED,
            Rgba::BLACK,
            LineMode::Aliased,
            TrigQuad::Middle,
        );

        for y in 11..30 {
            assert_eq!(fb.get_pixel(10, y), Some(Rgba::RED), "row {y}");
        }
        assert_eq!(fb.get_pixel(20, 10), Some(Rgba::BLACK));
    }

    #[test]
    fn test_antialiased_axis_edges_are_opaque() {
        let mut fb = white_fb();
        draw_triangle(
            &mut fb,
            right_triangle(),
            Rgba::RED,
            Rgba::BLACK,
            LineMode::Antialiased,
            TrigQuad::All,
        );

        for k in 11..30 {
            assert_eq!(fb.get_pixel(10, k), Some(Rgba::BLACK));
            assert_eq!(fb.get_pixel(k, 10), Some(Rgba::BLACK));
        }
        assert_eq!(fb.get_pixel(14, 14), Some(Rgba::RED));
    }

    #[test]
    fn test_antialiased_fringe_stays_off_suppressed_edge() {
        let mut fb = white_fb();
        // Steep left edges whose Wu fringe would reach column 40 next to the apex
        draw_triangle(
            &mut fb,
            [Point::new(15, 32), Point::new(40, 2), Point::new(40, 62)],
            Rgba::RED,
            Rgba::BLACK,
            LineMode::Antialiased,
            TrigQuad::Middle,
        );

        for y in 3..62 {
            assert_eq!(fb.get_pixel(40, y), Some(Rgba::RED), "seam row {y}");
        }
        for y in 0..64 {
            assert_eq!(fb.get_pixel(41, y), Some(Rgba::WHITE), "far side row {y}");
        }
    }

    #[test]
    fn test_seam_clip_regions() {
        let v = order_vertices([Point::new(15, 32), Point::new(40, 2), Point::new(40, 62)]);
        let middle = edges(v)[1];
        let clip = SeamClip::new(middle);

        assert!(clip.hides(Point::new(40, 3)));
        assert!(clip.hides(Point::new(45, 30)));
        assert!(!clip.hides(Point::new(40, 2)));
        assert!(!clip.hides(Point::new(41, 1)));
        assert!(!clip.hides(Point::new(39, 30)));
    }

    #[test]
    fn test_collinear_draws_no_fill() {
        let mut fb = white_fb();
        draw_triangle(
            &mut fb,
            [Point::new(0, 0), Point::new(10, 10), Point::new(20, 20)],
            Rgba::RED,
            Rgba::BLACK,
            LineMode::Aliased,
            TrigQuad::All,
        );
        assert_eq!(fb.count_pixels(|c| c == Rgba::RED), 0);
        assert_eq!(fb.get_pixel(5, 5), Some(Rgba::BLACK));
    }

    #[test]
    fn test_translucent_fill_written_once() {
        let mut fb = white_fb();
        let fill = Rgba::new(0, 0, 255, 128);
        draw_triangle(
            &mut fb,
            [Point::new(32, 4), Point::new(4, 60), Point::new(60, 50)],
            fill,
            Rgba::TRANSPARENT,
            LineMode::Aliased,
            TrigQuad::All,
        );

        let once = fb.get_pixel(32, 40).unwrap();
        assert_ne!(once, Rgba::WHITE);
        let touched = fb.count_pixels(|c| c != Rgba::WHITE);
        assert_eq!(fb.count_pixels(|c| c == once), touched);
    }

    #[test]
    fn test_parse_trig_quad() {
        assert_eq!("MIDDLE".parse::<TrigQuad>().unwrap(), TrigQuad::Middle);
        assert!(matches!(
            "side".parse::<TrigQuad>(),
            Err(Error::UnhandledQuadrant(_))
        ));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::framebuffer::Framebuffer;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Nothing is drawn outside the vertices' bounding box.
        #[test]
        fn prop_stays_in_bounding_box(
            ax in 0i32..48, ay in 0i32..48,
            bx in 0i32..48, by in 0i32..48,
            cx in 0i32..48, cy in 0i32..48,
        ) {
            let mut fb = Framebuffer::new(48, 48).expect("framebuffer");
            let v = [Point::new(ax, ay), Point::new(bx, by), Point::new(cx, cy)];
            draw_triangle(&mut fb, v, Rgba::RED, Rgba::BLACK, LineMode::Aliased, TrigQuad::All);

            let (min_x, max_x) = (ax.min(bx).min(cx), ax.max(bx).max(cx));
            let (min_y, max_y) = (ay.min(by).min(cy), ay.max(by).max(cy));
            for y in 0..48u32 {
                for x in 0..48u32 {
                    let painted = fb.get_pixel(x, y) != Some(Rgba::TRANSPARENT);
                    let inside = (min_x..=max_x).contains(&(x as i32))
                        && (min_y..=max_y).contains(&(y as i32));
                    prop_assert!(!painted || inside, "pixel ({}, {}) outside bbox", x, y);
                }
            }
        }
    }
}
