//! End-to-end rasterization scenarios through the public canvas API.
//!
//! Run: cargo test --test raster_scenarios_test

#![allow(clippy::unwrap_used)]

use tile_canvas::compose::{self, Primitive};
use tile_canvas::prelude::*;
use tile_canvas::render::{wu_coverage, Band};

fn canvas(w: u32, h: u32) -> Canvas {
    let mut fb = Framebuffer::new(w, h).unwrap();
    fb.clear(Rgba::WHITE);
    let mut canvas = Canvas::new(fb);
    canvas.set_fill(Rgba::RED);
    canvas.set_stroke(Rgba::BLACK);
    canvas
}

fn px(canvas: &Canvas, x: i32, y: i32) -> Rgba {
    canvas.surface().get_pixel(x as u32, y as u32).unwrap()
}

// ============================================================================
// Lines
// ============================================================================

#[test]
fn axis_aligned_antialiased_lines_are_opaque() {
    let mut c = canvas(100, 100);
    c.line(10, 40, 80, 40);
    c.line(60, 5, 60, 30);

    for x in 11..80 {
        assert_eq!(px(&c, x, 40), Rgba::BLACK, "row pixel {x}");
        assert_eq!(px(&c, x, 39), Rgba::WHITE);
        assert_eq!(px(&c, x, 41), Rgba::WHITE);
    }
    for y in 6..30 {
        assert_eq!(px(&c, 60, y), Rgba::BLACK, "column pixel {y}");
        assert_eq!(px(&c, 59, y), Rgba::WHITE);
        assert_eq!(px(&c, 61, y), Rgba::WHITE);
    }
}

#[test]
fn wu_interior_columns_sum_to_one() {
    let coverage = wu_coverage(3.0, 7.0, 90.0, 41.0);
    for x in 5..89 {
        let sum: f32 = coverage.iter().filter(|c| c.x == x).map(|c| c.weight).sum();
        approx::assert_relative_eq!(sum, 1.0, epsilon = 1e-4);
    }
}

// ============================================================================
// Circles
// ============================================================================

#[test]
fn circle_equals_union_of_quadrants() {
    let mut full = canvas(120, 120);
    full.set_fill(Rgba::new(255, 0, 0, 120));
    full.set_stroke_weight(3);
    full.circle(60, 60, 30, Align::Center, CircleQuad::All);

    let mut parts = canvas(120, 120);
    parts.set_fill(Rgba::new(255, 0, 0, 120));
    parts.set_stroke_weight(3);
    for quad in [
        CircleQuad::BottomRight,
        CircleQuad::TopLeft,
        CircleQuad::BottomLeft,
        CircleQuad::TopRight,
    ] {
        parts.circle(60, 60, 30, Align::Center, quad);
    }

    assert_eq!(full.surface(), parts.surface());
}

#[test]
fn circle_has_nothing_beyond_ring() {
    let mut c = canvas(100, 100);
    c.set_stroke_weight(2);
    c.circle(50, 50, 20, Align::Center, CircleQuad::All);

    for y in 0..100 {
        for x in 0..100 {
            let d = (((x - 50) * (x - 50) + (y - 50) * (y - 50)) as f32).sqrt() - 20.0;
            if d > 2.0 {
                assert_eq!(px(&c, x, y), Rgba::WHITE, "({x}, {y}) d={d}");
            }
        }
    }
    assert_eq!(tile_canvas::render::classify(2.5, 2.0), Band::Outside);
}

// ============================================================================
// Rounded rectangles
// ============================================================================

#[test]
fn rounded_rect_scenario() {
    let state = RenderState {
        fill: Rgba::RED,
        stroke: Rgba::BLACK,
        ..RenderState::default()
    };
    let rect = tile_canvas::align::resolve(100, 100, 60, 40, Align::Center);
    let prims = compose::rounded_rect(rect, 10, &state).unwrap();

    let arcs: Vec<(Point, i32)> = prims
        .iter()
        .filter_map(|p| match *p {
            Primitive::Circle { center, radius, .. } => Some((center, radius)),
            _ => None,
        })
        .collect();
    assert_eq!(
        arcs,
        vec![
            (Point::new(80, 90), 11),
            (Point::new(120, 90), 11),
            (Point::new(80, 110), 11),
            (Point::new(120, 110), 11),
        ]
    );

    // Top and bottom flat borders cover the straight run between the arcs
    let mut c = canvas(200, 200);
    c.rounded_rect(100, 100, 60, 40, 10, Align::Center).unwrap();
    for x in 90..=110 {
        assert_eq!(px(&c, x, 79), Rgba::BLACK, "top border at {x}");
        assert_eq!(px(&c, x, 121), Rgba::BLACK, "bottom border at {x}");
    }
    assert_eq!(px(&c, 100, 100), Rgba::RED);
}

#[test]
fn translucent_rounded_rect_has_no_inner_seams() {
    let mut c = canvas(200, 200);
    c.set_fill(Rgba::new(0, 0, 255, 100));
    c.rounded_rect(100, 100, 60, 40, 10, Align::Center).unwrap();

    let interior = px(&c, 100, 100);
    // Arc-owned column and row next to their neighbours
    assert_eq!(px(&c, 80, 85), interior);
    assert_eq!(px(&c, 81, 85), interior);
    assert_eq!(px(&c, 75, 90), interior);
    assert_eq!(px(&c, 75, 91), interior);
    assert_eq!(px(&c, 120, 115), interior);
    assert_eq!(px(&c, 125, 110), interior);
}

#[test]
fn rounded_rect_radius_too_large() {
    let mut c = canvas(20, 20);
    let err = c.rounded_rect(0, 0, 10, 10, 6, Align::Left).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidGeometry {
            radius: 6,
            width: 10,
            height: 10
        }
    ));
    assert_eq!(c.surface().count_pixels(|p| p != Rgba::WHITE), 0);
}

#[test]
fn rounded_rect_zero_radius_is_rect() {
    for align in [Align::Left, Align::Center, Align::Right] {
        let mut a = canvas(80, 80);
        a.rect(40, 40, 24, 16, align);
        let mut b = canvas(80, 80);
        b.rounded_rect(40, 40, 24, 16, 0, align).unwrap();
        assert_eq!(a.surface(), b.surface(), "{align}");
    }
}

// ============================================================================
// Rhombus
// ============================================================================

#[test]
fn rhombus_shared_edge_is_invisible() {
    let mut c = canvas(120, 120);
    c.rhombus(60, 60, 50, 60, Align::Center);

    for y in 31..=89 {
        assert_ne!(px(&c, 60, y), Rgba::BLACK, "seam row {y}");
        assert_eq!(px(&c, 60, y), Rgba::RED, "seam row {y}");
    }
}

#[test]
fn rhombus_outer_edges_are_stroked() {
    for mode in [LineMode::Aliased, LineMode::Antialiased] {
        let mut c = canvas(100, 100);
        c.set_line_mode(mode);
        c.rhombus(50, 50, 40, 40, Align::Center);

        // 45 degree diagonals get full coverage in both modes
        for k in 1..20 {
            assert_eq!(px(&c, 30 + k, 50 - k), Rgba::BLACK, "{mode:?} k={k}");
            assert_eq!(px(&c, 70 - k, 50 - k), Rgba::BLACK, "{mode:?} k={k}");
            assert_eq!(px(&c, 30 + k, 50 + k), Rgba::BLACK, "{mode:?} k={k}");
            assert_eq!(px(&c, 70 - k, 50 + k), Rgba::BLACK, "{mode:?} k={k}");
        }
        for y in 31..=69 {
            assert_eq!(px(&c, 50, y), Rgba::RED, "{mode:?} seam row {y}");
        }
    }
}

// ============================================================================
// Style scoping
// ============================================================================

#[test]
fn scoped_style_never_leaks() {
    let mut c = canvas(50, 50);
    let before = *c.state();
    {
        let mut scope = c.push_style();
        scope.set_fill(Rgba::BLUE);
        scope.set_stroke(Rgba::TRANSPARENT);
        scope.set_stroke_weight(5);
        scope.rect(0, 0, 10, 10, Align::Left);
    }
    assert_eq!(*c.state(), before);
    assert_eq!(px(&c, 5, 5), Rgba::BLUE);
}

#[test]
fn text_hit_testing_follows_alignment() {
    let mut c = canvas(300, 100);
    c.set_text_align(TextAlign::Center);
    c.set_text_size(20);
    let mut font = BlockText::default();

    let label = c.text(&mut font, "BUILD", 150, 50);
    // 5 glyphs at advance 12
    assert_eq!(label.bounds(), Rect::new(120, 40, 60, 20));
    assert!(label.contains(150, 50));
    assert!(label.contains(120, 40));
    assert!(!label.contains(119, 50));
}
