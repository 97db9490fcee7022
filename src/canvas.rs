//! The drawing context.
//!
//! A [`Canvas`] owns a [`Surface`] and the [`RenderState`] every primitive
//! reads. Style setters change the state; draw calls resolve their anchor,
//! rasterize and write through the surface before returning.

use crate::align::{resolve, resolve_text, Align, TextAlign};
use crate::color::Rgba;
use crate::compose::{self, draw_rect, Primitive};
use crate::config::CanvasConfig;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::geometry::Point;
use crate::output::PngEncoder;
use crate::render::{
    draw_circle, draw_line, draw_line_aa, draw_triangle, CircleQuad, TrigQuad,
};
use crate::sprite::ImageSource;
use crate::state::{LineMode, RenderState, StyleScope};
use crate::surface::Surface;
use crate::text::{TextBox, TextRenderer};
use std::path::Path;

/// Immediate-mode drawing context over a surface.
///
/// # Example
///
/// ```
/// use tile_canvas::prelude::*;
///
/// let mut canvas = Canvas::new(Framebuffer::new(64, 64).unwrap());
/// canvas.set_fill(Rgba::RED);
/// canvas.set_stroke(Rgba::BLACK);
/// canvas.rounded_rect(32, 32, 40, 20, 5, Align::Center).unwrap();
///
/// assert_eq!(canvas.surface().get_pixel(32, 32), Some(Rgba::RED));
/// ```
#[derive(Debug, Clone)]
pub struct Canvas<S: Surface = Framebuffer> {
    surface: S,
    state: RenderState,
}

impl<S: Surface> Canvas<S> {
    /// Wrap a surface with the default render state.
    pub fn new(surface: S) -> Self {
        Self::with_state(surface, RenderState::default())
    }

    /// Wrap a surface with an explicit render state.
    pub fn with_state(surface: S, state: RenderState) -> Self {
        Self { surface, state }
    }

    /// The underlying surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the underlying surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Consume the canvas, returning its surface.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Current render state.
    pub fn state(&self) -> &RenderState {
        &self.state
    }

    pub(crate) fn restore_state(&mut self, state: RenderState) {
        self.state = state;
    }

    // ========================================================================
    // Style
    // ========================================================================

    /// Set the interior color of filled shapes and the text color.
    pub fn set_fill(&mut self, color: Rgba) {
        self.state.fill = color;
    }

    /// Set the outline color.
    pub fn set_stroke(&mut self, color: Rgba) {
        self.state.stroke = color;
    }

    /// Set the outline width; values below 1 are raised to 1.
    pub fn set_stroke_weight(&mut self, weight: u32) {
        self.state.stroke_weight = weight.max(1);
    }

    /// Choose between aliased and anti-aliased lines.
    pub fn set_line_mode(&mut self, mode: LineMode) {
        self.state.line_mode = mode;
    }

    /// Set the anchor used by [`Canvas::image`].
    pub fn set_image_align(&mut self, align: Align) {
        self.state.image_align = align;
    }

    /// Set the anchor used by [`Canvas::text`].
    pub fn set_text_align(&mut self, align: TextAlign) {
        self.state.text_align = align;
    }

    /// Set the size passed to the text renderer.
    pub fn set_text_size(&mut self, size: u32) {
        self.state.text_size = size;
    }

    /// Begin a scoped style override; the current state is restored when the
    /// returned guard is dropped.
    pub fn push_style(&mut self) -> StyleScope<'_, S> {
        StyleScope::new(self)
    }

    // ========================================================================
    // Primitives
    // ========================================================================

    /// Draw a line in the stroke color; returns the pixels plotted.
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<Point> {
        let color = self.state.stroke;
        match self.state.line_mode {
            LineMode::Aliased => draw_line(&mut self.surface, x0, y0, x1, y1, color),
            LineMode::Antialiased => draw_line_aa(
                &mut self.surface,
                x0 as f32,
                y0 as f32,
                x1 as f32,
                y1 as f32,
                color,
            ),
        }
    }

    /// Draw a filled triangle, leaving the `suppress` edge unstroked.
    pub fn triangle(&mut self, p0: Point, p1: Point, p2: Point, suppress: TrigQuad) {
        let RenderState {
            fill,
            stroke,
            line_mode,
            ..
        } = self.state;
        draw_triangle(&mut self.surface, [p0, p1, p2], fill, stroke, line_mode, suppress);
    }

    /// Draw a filled rectangle with an inward outline of the stroke weight.
    pub fn rect(&mut self, x: i32, y: i32, w: i32, h: i32, align: Align) {
        let rect = resolve(x, y, w, h, align);
        let RenderState {
            fill,
            stroke,
            stroke_weight,
            ..
        } = self.state;
        draw_rect(&mut self.surface, rect, fill, stroke, stroke_weight);
    }

    /// Draw a rectangle with rounded corners of radius `r`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGeometry`](crate::Error::InvalidGeometry) when
    /// `r` exceeds half the width or height; nothing is drawn.
    pub fn rounded_rect(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        r: i32,
        align: Align,
    ) -> Result<()> {
        let prims = compose::rounded_rect(resolve(x, y, w, h, align), r, &self.state)?;
        self.draw_all(&prims);
        Ok(())
    }

    /// Draw a diamond spanning `w`x`h`.
    pub fn rhombus(&mut self, x: i32, y: i32, w: i32, h: i32, align: Align) {
        let center = resolve(x, y, w, h, align).center();
        let prims = compose::rhombus(center, w, h, &self.state);
        self.draw_all(&prims);
    }

    /// Draw a circle, or one quadrant of it.
    ///
    /// With [`Align::Center`] `(x, y)` is the center; otherwise it is the
    /// left or right top corner of the circle's `2r` bounding square.
    pub fn circle(&mut self, x: i32, y: i32, r: i32, align: Align, quad: CircleQuad) {
        let center = resolve(x, y, 2 * r, 2 * r, align).center();
        let RenderState {
            fill,
            stroke,
            stroke_weight,
            ..
        } = self.state;
        draw_circle(
            &mut self.surface,
            center.x,
            center.y,
            r,
            fill,
            stroke,
            stroke_weight,
            quad,
        );
    }

    /// Execute pre-built primitives in order.
    pub fn draw_all(&mut self, prims: &[Primitive]) {
        for prim in prims {
            prim.draw(&mut self.surface);
        }
    }

    // ========================================================================
    // Images and text
    // ========================================================================

    /// Draw a named image scaled to `w`x`h`, anchored with the image alignment.
    ///
    /// Images the source cannot load are skipped.
    #[allow(clippy::too_many_arguments)]
    pub fn image<I: ImageSource>(
        &mut self,
        source: &mut I,
        name: &str,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        alpha: u8,
    ) {
        let rect = resolve(x, y, w, h, self.state.image_align);
        source.draw(name, &mut self.surface, rect, alpha);
    }

    /// Pixel size of a named image.
    #[allow(clippy::unused_self)]
    pub fn image_dimensions<I: ImageSource>(
        &self,
        source: &mut I,
        name: &str,
    ) -> Option<(u32, u32)> {
        source.dimensions(name)
    }

    /// Draw a label in the fill color at the current text size and alignment.
    ///
    /// Returns the placed label for hit testing.
    pub fn text<T: TextRenderer>(
        &mut self,
        renderer: &mut T,
        text: &str,
        x: i32,
        y: i32,
    ) -> TextBox {
        let RenderState {
            fill,
            text_size,
            text_align,
            ..
        } = self.state;
        let (w, h) = renderer.measure(text, text_size);
        let label = TextBox::new(text, x, y, w as i32, h as i32, text_align);
        let origin = label.bounds();
        renderer.render(
            &mut self.surface,
            text,
            Point::new(origin.x, origin.y),
            text_size,
            fill,
        );
        label
    }

    /// Draw a label with explicit color, size and horizontal alignment.
    ///
    /// The vertical anchor is always the label's top edge.
    #[allow(clippy::too_many_arguments)]
    pub fn text_styled<T: TextRenderer>(
        &mut self,
        renderer: &mut T,
        text: &str,
        color: Rgba,
        size: u32,
        x: i32,
        y: i32,
        align: Align,
    ) {
        let (w, h) = renderer.measure(text, size);
        let rect = resolve_text(x, y, w as i32, h as i32, align);
        renderer.render(&mut self.surface, text, Point::new(rect.x, rect.y), size, color);
    }
}

impl Canvas<Framebuffer> {
    /// Build a cleared framebuffer canvas from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured size is zero.
    pub fn from_config(config: &CanvasConfig) -> Result<Self> {
        let mut fb = Framebuffer::new(config.width, config.height)?;
        fb.clear(config.background);
        log::debug!(
            "canvas {}x{} from config, line mode {:?}",
            config.width,
            config.height,
            config.line_mode
        );
        Ok(Self::with_state(fb, config.render_state()))
    }

    /// Overwrite every pixel with `color`.
    pub fn clear(&mut self, color: Rgba) {
        self.surface.clear(color);
    }

    /// Write the framebuffer to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or encoding fails.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        PngEncoder::write_to_file(&self.surface, path)
    }
}
