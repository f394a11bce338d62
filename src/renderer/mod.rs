//! 2D drawing surface abstraction
//!
//! Mirrors the subset of the canvas 2D context the plexus needs, so the
//! simulation can draw to a browser canvas or to a recording in tests.

pub mod proximity;
pub mod recording;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use proximity::{ProximityEdge, ProximityRenderer};
pub use recording::{DrawCommand, RecordingSurface};

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use crate::color::Rgba;
use crate::error::PlexusError;

/// Immediate-mode path drawing, canvas 2D style
pub trait DrawSurface {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn begin_path(&mut self);
    /// Circular arc around (x, y); angles in radians
    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Result<(), PlexusError>;
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn fill(&mut self);
    fn stroke(&mut self);
    fn set_fill_style(&mut self, color: Rgba);
    fn set_stroke_style(&mut self, color: Rgba);
    fn set_line_width(&mut self, width: f64);
}
