//! Render state shared by every primitive on a canvas.
//!
//! The state is read by each draw call and mutated only by the style setters
//! on [`Canvas`]. Composite shapes that need temporary overrides take a
//! [`StyleScope`], which puts the previous state back when it is dropped.

use crate::align::{Align, TextAlign};
use crate::canvas::Canvas;
use crate::color::Rgba;
use crate::surface::Surface;
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};

/// Line rasterization algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineMode {
    /// Integer error-accumulation stepping, one opaque pixel per step.
    Aliased,
    /// Wu's algorithm with sub-pixel coverage blending.
    #[default]
    Antialiased,
}

/// Current fill/stroke style and alignment modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderState {
    /// Interior color of filled shapes (and the color of text).
    pub fill: Rgba,
    /// Outline color.
    pub stroke: Rgba,
    /// Outline width in pixels, never below 1.
    pub stroke_weight: u32,
    /// Algorithm used by `line` and triangle edges.
    pub line_mode: LineMode,
    /// Anchor semantics for images.
    pub image_align: Align,
    /// Anchor semantics for text.
    pub text_align: TextAlign,
    /// Text size handed to the text renderer.
    pub text_size: u32,
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            fill: Rgba::TRANSPARENT,
            stroke: Rgba::TRANSPARENT,
            stroke_weight: 1,
            line_mode: LineMode::default(),
            image_align: Align::default(),
            text_align: TextAlign::default(),
            text_size: 24,
        }
    }
}

/// Scoped style override.
///
/// Dereferences to the canvas; when dropped, the render state captured at
/// creation is restored, so no style change made through the scope is
/// observable afterwards.
pub struct StyleScope<'a, S: Surface> {
    canvas: &'a mut Canvas<S>,
    saved: RenderState,
}

impl<'a, S: Surface> StyleScope<'a, S> {
    pub(crate) fn new(canvas: &'a mut Canvas<S>) -> Self {
        let saved = *canvas.state();
        Self { canvas, saved }
    }

    /// The state that will be restored on drop.
    #[must_use]
    pub fn saved(&self) -> &RenderState {
        &self.saved
    }
}

impl<S: Surface> Deref for StyleScope<'_, S> {
    type Target = Canvas<S>;

    fn deref(&self) -> &Self::Target {
        self.canvas
    }
}

impl<S: Surface> DerefMut for StyleScope<'_, S> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.canvas
    }
}

impl<S: Surface> Drop for StyleScope<'_, S> {
    fn drop(&mut self) {
        self.canvas.restore_state(self.saved);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::Framebuffer;

    fn canvas() -> Canvas<Framebuffer> {
        Canvas::new(Framebuffer::new(16, 16).unwrap())
    }

    #[test]
    fn test_default_state() {
        let state = RenderState::default();
        assert_eq!(state.fill, Rgba::TRANSPARENT);
        assert_eq!(state.stroke, Rgba::TRANSPARENT);
        assert_eq!(state.stroke_weight, 1);
        assert_eq!(state.line_mode, LineMode::Antialiased);
    }

    #[test]
    fn test_scope_restores_on_drop() {
        let mut canvas = canvas();
        canvas.set_fill(Rgba::RED);
        canvas.set_stroke(Rgba::BLACK);

        {
            let mut scope = canvas.push_style();
            scope.set_fill(Rgba::BLUE);
            scope.set_stroke_weight(4);
            scope.set_line_mode(LineMode::Aliased);
            assert_eq!(scope.state().fill, Rgba::BLUE);
            assert_eq!(scope.saved().fill, Rgba::RED);
        }

        assert_eq!(canvas.state().fill, Rgba::RED);
        assert_eq!(canvas.state().stroke, Rgba::BLACK);
        assert_eq!(canvas.state().stroke_weight, 1);
        assert_eq!(canvas.state().line_mode, LineMode::Antialiased);
    }

    #[test]
    fn test_nested_scopes() {
        let mut canvas = canvas();
        canvas.set_fill(Rgba::RED);
        {
            let mut outer = canvas.push_style();
            outer.set_fill(Rgba::GREEN);
            {
                let mut inner = outer.push_style();
                inner.set_fill(Rgba::BLUE);
            }
            assert_eq!(outer.state().fill, Rgba::GREEN);
        }
        assert_eq!(canvas.state().fill, Rgba::RED);
    }

    #[test]
    fn test_scope_keeps_pixels() {
        let mut canvas = canvas();
        {
            let mut scope = canvas.push_style();
            scope.set_fill(Rgba::RED);
            scope.rect(0, 0, 2, 2, Align::Left);
        }
        assert_eq!(canvas.surface().get_pixel(1, 1), Some(Rgba::RED));
        assert_eq!(canvas.state().fill, Rgba::TRANSPARENT);
    }
}
