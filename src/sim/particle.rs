//! A single drifting particle

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::color::Rgba;
use crate::error::PlexusError;
use crate::renderer::DrawSurface;
use crate::surface::Surface;

/// A moving point drawn as a filled circle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: DVec2,
    /// Displacement per tick
    pub vel: DVec2,
    pub radius: f64,
    pub color: Rgba,
}

impl Particle {
    pub fn new(pos: DVec2, vel: DVec2, radius: f64, color: Rgba) -> Self {
        Self {
            pos,
            vel,
            radius,
            color,
        }
    }

    /// Paint a filled circle at the current position
    pub fn draw<D: DrawSurface>(&self, draw: &mut D) -> Result<(), PlexusError> {
        draw.begin_path();
        draw.arc(self.pos.x, self.pos.y, self.radius, 0.0, TAU)?;
        draw.set_fill_style(self.color);
        draw.fill();
        Ok(())
    }

    /// Bounce off the surface edges, move one tick, then draw.
    ///
    /// The bounds test looks at the position *before* the move, so a particle
    /// that just crossed an edge is drawn slightly outside the surface for a
    /// tick before it comes back.
    pub fn advance<D: DrawSurface>(
        &mut self,
        surface: Surface,
        draw: &mut D,
    ) -> Result<(), PlexusError> {
        self.reflect(surface);
        self.pos += self.vel;
        self.draw(draw)
    }

    /// Negate each velocity component whose axis is outside `[0, dimension]`
    fn reflect(&mut self, surface: Surface) {
        let width = surface.width as f64;
        let height = surface.height as f64;
        if self.pos.x > width || self.pos.x < 0.0 {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y > height || self.pos.y < 0.0 {
            self.vel.y = -self.vel.y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::PARTICLE_COLOR;
    use crate::renderer::{DrawCommand, RecordingSurface};
    use proptest::prelude::*;

    fn particle(x: f64, y: f64, dx: f64, dy: f64) -> Particle {
        Particle::new(DVec2::new(x, y), DVec2::new(dx, dy), 2.0, PARTICLE_COLOR)
    }

    const SURFACE: Surface = Surface::new(800, 600);

    #[test]
    fn test_advance_inside_moves_without_flip() {
        let mut p = particle(100.0, 100.0, 0.2, -0.1);
        let mut rec = RecordingSurface::new();
        p.advance(SURFACE, &mut rec).unwrap();
        assert_eq!(p.vel, DVec2::new(0.2, -0.1));
        assert!((p.pos - DVec2::new(100.2, 99.9)).length() < 1e-9);
    }

    #[test]
    fn test_advance_past_left_edge_flips_x() {
        let mut p = particle(-0.05, 50.0, -0.1, 0.05);
        let mut rec = RecordingSurface::new();
        p.advance(SURFACE, &mut rec).unwrap();
        assert_eq!(p.vel, DVec2::new(0.1, 0.05));
        assert!((p.pos - DVec2::new(0.05, 50.05)).length() < 1e-9);
    }

    #[test]
    fn test_advance_on_edge_does_not_flip() {
        // x == 0 is inside [0, width]; the particle steps out and flips next tick
        let mut p = particle(0.0, 50.0, -0.1, 0.05);
        let mut rec = RecordingSurface::new();
        p.advance(SURFACE, &mut rec).unwrap();
        assert_eq!(p.vel.x, -0.1);
        assert!(p.pos.x < 0.0);

        p.advance(SURFACE, &mut rec).unwrap();
        assert_eq!(p.vel.x, 0.1);
        assert!((p.pos.x - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_advance_past_bottom_right_flips_both() {
        let mut p = particle(800.5, 600.5, 0.1, 0.2);
        let mut rec = RecordingSurface::new();
        p.advance(SURFACE, &mut rec).unwrap();
        assert_eq!(p.vel, DVec2::new(-0.1, -0.2));
    }

    #[test]
    fn test_advance_on_zero_area_surface() {
        let mut p = particle(0.0, 0.0, 0.1, 0.1);
        let mut rec = RecordingSurface::new();
        p.advance(Surface::new(0, 0), &mut rec).unwrap();
        // (0, 0) is on both edges, so no flip yet
        assert_eq!(p.vel, DVec2::new(0.1, 0.1));
        p.advance(Surface::new(0, 0), &mut rec).unwrap();
        assert_eq!(p.vel, DVec2::new(-0.1, -0.1));
    }

    #[test]
    fn test_draw_emits_filled_circle() {
        let p = particle(10.0, 20.0, 0.0, 0.0);
        let mut rec = RecordingSurface::new();
        p.draw(&mut rec).unwrap();
        assert_eq!(
            rec.commands,
            vec![
                DrawCommand::BeginPath,
                DrawCommand::Arc {
                    x: 10.0,
                    y: 20.0,
                    radius: 2.0,
                    start: 0.0,
                    end: TAU
                },
                DrawCommand::FillStyle(PARTICLE_COLOR),
                DrawCommand::Fill,
            ]
        );
    }

    #[test]
    fn test_draw_failure_propagates() {
        let p = particle(10.0, 20.0, 0.0, 0.0);
        let mut rec = RecordingSurface {
            fail_arcs: true,
            ..Default::default()
        };
        assert!(matches!(p.draw(&mut rec), Err(PlexusError::Draw(_))));
    }

    proptest! {
        #[test]
        fn prop_velocity_flips_only_when_outside(
            x in -50.0f64..850.0,
            y in -50.0f64..650.0,
            dx in -0.2f64..0.2,
            dy in -0.2f64..0.2,
        ) {
            let mut p = particle(x, y, dx, dy);
            let mut rec = RecordingSurface::new();
            p.advance(SURFACE, &mut rec).unwrap();

            let outside_x = x < 0.0 || x > 800.0;
            let outside_y = y < 0.0 || y > 600.0;
            prop_assert_eq!(p.vel.x, if outside_x { -dx } else { dx });
            prop_assert_eq!(p.vel.y, if outside_y { -dy } else { dy });
            prop_assert_eq!(p.pos, DVec2::new(x, y) + p.vel);
        }
    }
}
