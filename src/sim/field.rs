//! The particle population
//!
//! Population size follows surface area: one particle per `density_divisor`
//! pixels². The whole population is rebuilt on every seed.

use glam::DVec2;
use rand::Rng;

use super::particle::Particle;
use crate::color::Rgba;
use crate::config::PlexusConfig;
use crate::error::PlexusError;
use crate::renderer::DrawSurface;
use crate::surface::Surface;

/// Seeding parameters taken from the config
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldParams {
    pub density_divisor: u32,
    pub min_radius: f64,
    pub radius_span: f64,
    pub max_speed: f64,
    pub color: Rgba,
}

impl From<&PlexusConfig> for FieldParams {
    fn from(config: &PlexusConfig) -> Self {
        Self {
            density_divisor: config.density_divisor,
            min_radius: config.min_radius,
            radius_span: config.radius_span,
            max_speed: config.max_speed,
            color: config.particle_color,
        }
    }
}

impl Default for FieldParams {
    fn default() -> Self {
        Self::from(&PlexusConfig::default())
    }
}

/// Owns the particle sequence (stable order between seeds)
#[derive(Debug, Clone, Default)]
pub struct ParticleField {
    params: FieldParams,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(params: FieldParams) -> Self {
        Self {
            params,
            particles: Vec::new(),
        }
    }

    /// Particle count for a surface: floor(area / density_divisor)
    pub fn target_count(&self, surface: Surface) -> usize {
        match self.params.density_divisor {
            0 => 0,
            d => (surface.area() / d as u64) as usize,
        }
    }

    /// Discard the population and build a fresh one for `surface`.
    ///
    /// Each particle consumes five uniform draws in order: radius, x, y, dx, dy.
    pub fn seed<R: Rng>(&mut self, surface: Surface, rng: &mut R) {
        let count = self.target_count(surface);
        let p = self.params;

        self.particles.clear();
        self.particles.reserve(count);

        for _ in 0..count {
            let radius = rng.random::<f64>() * p.radius_span + p.min_radius;
            let x = inset_coordinate(rng.random(), surface.width as f64, radius);
            let y = inset_coordinate(rng.random(), surface.height as f64, radius);
            let dx = rng.random::<f64>() * p.max_speed * 2.0 - p.max_speed;
            let dy = rng.random::<f64>() * p.max_speed * 2.0 - p.max_speed;
            self.particles.push(Particle::new(
                DVec2::new(x, y),
                DVec2::new(dx, dy),
                radius,
                p.color,
            ));
        }

        log::debug!(
            "Seeded {} particles for {}x{}",
            count,
            surface.width,
            surface.height
        );
    }

    /// Advance (and draw) every particle in sequence order
    pub fn advance_all<D: DrawSurface>(
        &mut self,
        surface: Surface,
        draw: &mut D,
    ) -> Result<(), PlexusError> {
        for particle in &mut self.particles {
            particle.advance(surface, draw)?;
        }
        Ok(())
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }
}

/// Map a unit draw into `[2r, dimension - 2r)`, or the axis midpoint when the
/// surface is too narrow to keep a `2r` margin on both sides.
fn inset_coordinate(unit: f64, dimension: f64, radius: f64) -> f64 {
    let margin = radius * 2.0;
    let span = dimension - margin * 2.0;
    if span > 0.0 {
        unit * span + margin
    } else {
        dimension / 2.0
    }
}
