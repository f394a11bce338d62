//! Particle simulation
//!
//! All motion lives here. Given the same seed and the same sequence of surface
//! sizes, the particle sequence is reproducible:
//! - Seeded RNG only (`Pcg32`)
//! - Stable iteration order (sequence index)
//! - Drawing goes through the `DrawSurface` trait, never a global handle

pub mod context;
pub mod field;
pub mod frame;
pub mod particle;

pub use context::SimulationContext;
pub use field::{FieldParams, ParticleField};
pub use frame::{CountingScheduler, FrameScheduler, FrameStats, LoopState, SimulationLoop};
pub use particle::Particle;
