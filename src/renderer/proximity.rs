//! Proximity edges between nearby particles
//!
//! Every unordered pair (i, j) with i <= j is tested each frame, the self-pair
//! included. A pair is joined when its squared distance is below
//! `(width / divisor) * (height / divisor)`, and the stroke alpha falls off as
//! `1 - d² / falloff`. Alpha is not clamped; on very wide or tall surfaces the
//! most distant qualifying pairs get a slightly negative alpha, which canvas
//! treats as transparent.

use glam::DVec2;

use super::DrawSurface;
use crate::color::Rgba;
use crate::config::PlexusConfig;
use crate::error::PlexusError;
use crate::sim::Particle;
use crate::surface::Surface;

/// A line to draw this frame (never stored across frames)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityEdge {
    /// Index of the first particle (a <= b)
    pub a: usize,
    pub b: usize,
    pub from: DVec2,
    pub to: DVec2,
    pub distance_sq: f64,
    pub opacity: f64,
}

/// Draws the plexus edges
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityRenderer {
    pub range_divisor: f64,
    pub falloff: f64,
    pub line_width: f64,
    pub color: Rgba,
}

impl Default for ProximityRenderer {
    fn default() -> Self {
        Self::from(&PlexusConfig::default())
    }
}

impl From<&PlexusConfig> for ProximityRenderer {
    fn from(config: &PlexusConfig) -> Self {
        Self {
            range_divisor: config.edge_range_divisor,
            falloff: config.edge_falloff,
            line_width: config.edge_line_width,
            color: config.edge_color,
        }
    }
}

impl ProximityRenderer {
    /// Squared-distance cutoff for a surface (zero for a zero-area surface)
    pub fn threshold(&self, surface: Surface) -> f64 {
        (surface.width as f64 / self.range_divisor) * (surface.height as f64 / self.range_divisor)
    }

    /// Stroke alpha for a squared distance
    pub fn opacity(&self, distance_sq: f64) -> f64 {
        1.0 - distance_sq / self.falloff
    }

    /// All edges for the current particle positions, in pair order
    pub fn edges<'a>(
        &'a self,
        surface: Surface,
        particles: &'a [Particle],
    ) -> impl Iterator<Item = ProximityEdge> + 'a {
        let threshold = self.threshold(surface);
        (0..particles.len()).flat_map(move |a| {
            (a..particles.len()).filter_map(move |b| {
                let from = particles[a].pos;
                let to = particles[b].pos;
                let distance_sq = from.distance_squared(to);
                (distance_sq < threshold).then(|| ProximityEdge {
                    a,
                    b,
                    from,
                    to,
                    distance_sq,
                    opacity: self.opacity(distance_sq),
                })
            })
        })
    }

    /// Stroke every edge; returns how many were drawn
    pub fn render<D: DrawSurface>(
        &self,
        surface: Surface,
        particles: &[Particle],
        draw: &mut D,
    ) -> Result<usize, PlexusError> {
        let mut drawn = 0;
        for edge in self.edges(surface, particles) {
            draw.set_stroke_style(self.color.with_alpha(edge.opacity));
            draw.set_line_width(self.line_width);
            draw.begin_path();
            draw.move_to(edge.from.x, edge.from.y);
            draw.line_to(edge.to.x, edge.to.y);
            draw.stroke();
            drawn += 1;
        }
        Ok(drawn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{EDGE_COLOR, PARTICLE_COLOR};
    use crate::renderer::{DrawCommand, RecordingSurface};
    use proptest::prelude::*;

    fn at(x: f64, y: f64) -> Particle {
        Particle::new(DVec2::new(x, y), DVec2::ZERO, 1.5, PARTICLE_COLOR)
    }

    const SURFACE: Surface = Surface::new(800, 600);

    #[test]
    fn test_threshold_800x600() {
        assert_eq!(ProximityRenderer::default().threshold(SURFACE), 7500.0);
    }

    #[test]
    fn test_close_pair_edge_opacity() {
        let renderer = ProximityRenderer::default();
        let particles = [at(0.0, 0.0), at(10.0, 0.0)];
        let edges: Vec<_> = renderer.edges(SURFACE, &particles).collect();

        let pair = edges.iter().find(|e| e.a == 0 && e.b == 1).unwrap();
        assert_eq!(pair.distance_sq, 100.0);
        assert!((pair.opacity - 0.996).abs() < 1e-12);
        assert_eq!(pair.opacity, 1.0 - 100.0 / 25_000.0);
    }

    #[test]
    fn test_self_pairs_are_included() {
        let renderer = ProximityRenderer::default();
        let particles = [at(0.0, 0.0), at(500.0, 500.0)];
        let edges: Vec<_> = renderer.edges(SURFACE, &particles).collect();

        // Far apart: only the two zero-length self edges remain
        assert_eq!(edges.len(), 2);
        assert!(edges.iter().all(|e| e.a == e.b && e.distance_sq == 0.0));
        assert!(edges.iter().all(|e| e.opacity == 1.0));
    }

    #[test]
    fn test_pair_order_is_upper_triangle() {
        let renderer = ProximityRenderer::default();
        let particles = [at(0.0, 0.0), at(1.0, 0.0), at(2.0, 0.0)];
        let pairs: Vec<_> = renderer
            .edges(SURFACE, &particles)
            .map(|e| (e.a, e.b))
            .collect();
        assert_eq!(pairs, vec![(0, 0), (0, 1), (0, 2), (1, 1), (1, 2), (2, 2)]);
    }

    #[test]
    fn test_threshold_is_strict() {
        let renderer = ProximityRenderer::default();
        // 7500 exactly is not inside the cutoff
        let particles = [at(0.0, 0.0), at(7500f64.sqrt(), 0.0)];
        let d2 = particles[0].pos.distance_squared(particles[1].pos);
        let joined = renderer
            .edges(SURFACE, &particles)
            .any(|e| e.a == 0 && e.b == 1);
        assert_eq!(joined, d2 < 7500.0);
    }

    #[test]
    fn test_zero_area_draws_nothing() {
        let renderer = ProximityRenderer::default();
        let particles = [at(0.0, 0.0), at(0.0, 0.0)];
        let mut rec = RecordingSurface::new();
        let drawn = renderer
            .render(Surface::new(0, 600), &particles, &mut rec)
            .unwrap();
        assert_eq!(drawn, 0);
        assert!(rec.commands.is_empty());
    }

    #[test]
    fn test_render_stroke_sequence() {
        let renderer = ProximityRenderer::default();
        let particles = [at(0.0, 0.0), at(10.0, 0.0)];
        let mut rec = RecordingSurface::new();
        let drawn = renderer.render(SURFACE, &particles, &mut rec).unwrap();
        assert_eq!(drawn, 3);
        assert_eq!(rec.stroke_count(), 3);

        // Second edge is the (0, 1) pair
        let opacity = 1.0 - 100.0 / 25_000.0;
        assert_eq!(
            &rec.commands[6..12],
            &[
                DrawCommand::StrokeStyle(EDGE_COLOR.with_alpha(opacity)),
                DrawCommand::LineWidth(1.0),
                DrawCommand::BeginPath,
                DrawCommand::MoveTo { x: 0.0, y: 0.0 },
                DrawCommand::LineTo { x: 10.0, y: 0.0 },
                DrawCommand::Stroke,
            ]
        );
    }

    #[test]
    fn test_wide_surface_allows_negative_opacity() {
        let renderer = ProximityRenderer::default();
        let wide = Surface::new(8000, 800);
        // threshold = 1000 * 100 = 100000, beyond the 25000 falloff
        let particles = [at(0.0, 0.0), at(200.0, 0.0)];
        let edge = renderer
            .edges(wide, &particles)
            .find(|e| e.a == 0 && e.b == 1)
            .unwrap();
        assert_eq!(edge.distance_sq, 40_000.0);
        assert!(edge.opacity < 0.0);
    }

    proptest! {
        #[test]
        fn prop_edge_iff_within_threshold(
            ax in 0.0f64..800.0, ay in 0.0f64..600.0,
            bx in 0.0f64..800.0, by in 0.0f64..600.0,
        ) {
            let renderer = ProximityRenderer::default();
            let particles = [at(ax, ay), at(bx, by)];
            let d2 = (ax - bx).powi(2) + (ay - by).powi(2);
            let edge = renderer.edges(SURFACE, &particles).find(|e| e.a == 0 && e.b == 1);
            match edge {
                Some(e) => {
                    prop_assert!(e.distance_sq < 7500.0);
                    prop_assert_eq!(e.opacity, 1.0 - e.distance_sq / 25_000.0);
                }
                None => prop_assert!(d2 >= 7500.0 - 1e-9),
            }
        }
    }
}
