//! Drawing surface dimensions
//!
//! The `SurfaceManager` is the single owner of the current size. Everything
//! else reads a `Surface` copy at the start of the operation that needs it.

use serde::{Deserialize, Serialize};

/// Pixel dimensions of the drawing area
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surface {
    pub width: u32,
    pub height: u32,
}

impl Surface {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Area in pixels² (cannot overflow for u32 sides)
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Owns the surface size and applies viewport changes synchronously
#[derive(Debug, Clone, Default)]
pub struct SurfaceManager {
    surface: Surface,
}

impl SurfaceManager {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            surface: Surface::new(width, height),
        }
    }

    /// Set the surface to the viewport size. Visible to all readers immediately.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface = Surface::new(width, height);
    }

    /// Current dimensions
    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn width(&self) -> u32 {
        self.surface.width
    }

    pub fn height(&self) -> u32 {
        self.surface.height
    }
}

/// Clamp raw viewport measurements to whole, non-negative pixels
pub fn clamp_viewport(width: f64, height: f64) -> (u32, u32) {
    fn side(v: f64) -> u32 {
        if v.is_nan() || v <= 0.0 {
            0
        } else {
            // `as` saturates at u32::MAX
            v.floor() as u32
        }
    }
    (side(width), side(height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_is_visible_immediately() {
        let mut manager = SurfaceManager::new(800, 600);
        manager.resize(1024, 768);
        assert_eq!(manager.surface(), Surface::new(1024, 768));
        assert_eq!(manager.width(), 1024);
        assert_eq!(manager.height(), 768);
    }

    #[test]
    fn test_area_and_empty() {
        assert_eq!(Surface::new(800, 600).area(), 480_000);
        assert!(Surface::new(0, 600).is_empty());
        assert!(!Surface::new(1, 1).is_empty());
        assert_eq!(Surface::new(u32::MAX, u32::MAX).area(), (u32::MAX as u64).pow(2));
    }

    #[test]
    fn test_clamp_viewport() {
        assert_eq!(clamp_viewport(800.7, 600.0), (800, 600));
        assert_eq!(clamp_viewport(-5.0, 10.0), (0, 10));
        assert_eq!(clamp_viewport(f64::NAN, f64::INFINITY), (0, u32::MAX));
    }
}
