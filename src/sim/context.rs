//! Simulation context
//!
//! Bundles the single owners of mutable state (surface size, particle field,
//! RNG) so every operation receives them explicitly.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::field::{FieldParams, ParticleField};
use crate::config::PlexusConfig;
use crate::renderer::ProximityRenderer;
use crate::surface::{Surface, SurfaceManager};

/// Everything one plexus instance needs per frame
#[derive(Debug, Clone)]
pub struct SimulationContext {
    pub surface: SurfaceManager,
    pub field: ParticleField,
    pub proximity: ProximityRenderer,
    pub rng: Pcg32,
}

impl SimulationContext {
    /// Build an unsized, unseeded context. Callers size the surface and then
    /// call [`reseed`](Self::reseed) before the first frame.
    pub fn new(config: &PlexusConfig, seed: u64) -> Self {
        Self {
            surface: SurfaceManager::default(),
            field: ParticleField::new(FieldParams::from(config)),
            proximity: ProximityRenderer::from(config),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Rebuild the particle population for the current surface
    pub fn reseed(&mut self) {
        let surface = self.surface.surface();
        self.field.seed(surface, &mut self.rng);
    }

    /// Resize then reseed; the two always happen together
    pub fn resize_and_reseed(&mut self, width: u32, height: u32) -> Surface {
        self.surface.resize(width, height);
        self.reseed();
        self.surface.surface()
    }
}
