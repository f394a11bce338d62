//! A drawing surface that records every call

use super::DrawSurface;
use crate::color::Rgba;
use crate::error::PlexusError;

/// One recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    ClearRect { x: f64, y: f64, width: f64, height: f64 },
    BeginPath,
    Arc { x: f64, y: f64, radius: f64, start: f64, end: f64 },
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Fill,
    Stroke,
    FillStyle(Rgba),
    StrokeStyle(Rgba),
    LineWidth(f64),
}

/// Headless surface for the native demo and tests
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
    /// When set, `arc` fails (simulates a lost surface)
    pub fail_arcs: bool,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Number of filled circles drawn
    pub fn fill_count(&self) -> usize {
        self.count(|c| matches!(c, DrawCommand::Fill))
    }

    /// Number of stroked lines drawn
    pub fn stroke_count(&self) -> usize {
        self.count(|c| matches!(c, DrawCommand::Stroke))
    }

    fn count(&self, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }
}

impl DrawSurface for RecordingSurface {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::ClearRect { x, y, width, height });
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start: f64,
        end: f64,
    ) -> Result<(), PlexusError> {
        if self.fail_arcs {
            return Err(PlexusError::Draw("arc rejected".into()));
        }
        self.commands.push(DrawCommand::Arc { x, y, radius, start, end });
        Ok(())
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::LineTo { x, y });
    }

    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill);
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }

    fn set_fill_style(&mut self, color: Rgba) {
        self.commands.push(DrawCommand::FillStyle(color));
    }

    fn set_stroke_style(&mut self, color: Rgba) {
        self.commands.push(DrawCommand::StrokeStyle(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::LineWidth(width));
    }
}
