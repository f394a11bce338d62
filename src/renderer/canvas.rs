//! Browser canvas 2D backend

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::DrawSurface;
use crate::color::Rgba;
use crate::error::PlexusError;
use crate::surface::Surface;

/// A `<canvas>` element and its 2D context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
        Self { canvas, ctx }
    }

    /// Match the canvas backing store to the surface (also clears it)
    pub fn set_size(&self, surface: Surface) {
        self.canvas.set_width(surface.width);
        self.canvas.set_height(surface.height);
    }
}

impl DrawSurface for CanvasSurface {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.clear_rect(x, y, width, height);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Result<(), PlexusError> {
        self.ctx
            .arc(x, y, radius, start_angle, end_angle)
            .map_err(|e| PlexusError::Draw(PlexusError::js_message(&e)))
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn set_fill_style(&mut self, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_css());
    }

    fn set_stroke_style(&mut self, color: Rgba) {
        self.ctx.set_stroke_style_str(&color.to_css());
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }
}
