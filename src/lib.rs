//! Net Plexus - a drifting particle network for 2D canvas backgrounds
//!
//! Core modules:
//! - `sim`: Particle motion, field seeding, and the per-frame loop
//! - `renderer`: Drawing surface abstraction and proximity edges
//! - `surface`: Surface dimensions owned by the `SurfaceManager`
//! - `resize`: Debounced viewport resize coordination
//! - `platform`: Browser host (canvas, animation frames, timers)
//! - `config`: Tunables with serde-backed loading

pub mod app;
pub mod color;
pub mod config;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod resize;
pub mod sim;
pub mod surface;

pub use app::Plexus;
pub use color::Rgba;
pub use config::PlexusConfig;
pub use error::PlexusError;
pub use surface::{Surface, SurfaceManager};

/// Default tuning constants (mirrored by `PlexusConfig::default`)
pub mod consts {
    use crate::color::Rgba;

    /// Surface area (pixels²) allotted to each particle
    pub const DENSITY_DIVISOR: u32 = 12_000;
    /// Edge threshold is (width / N) * (height / N)
    pub const EDGE_RANGE_DIVISOR: f64 = 8.0;
    /// Edge opacity = 1 - d² / falloff
    pub const EDGE_FALLOFF: f64 = 25_000.0;
    pub const EDGE_LINE_WIDTH: f64 = 1.0;

    /// Quiet period before a resize burst is applied
    pub const RESIZE_DEBOUNCE_MS: u32 = 250;

    /// Particle radius is drawn from [MIN_RADIUS, MIN_RADIUS + RADIUS_SPAN)
    pub const MIN_RADIUS: f64 = 1.0;
    pub const RADIUS_SPAN: f64 = 2.0;
    /// Velocity components are drawn from [-MAX_SPEED, MAX_SPEED)
    pub const MAX_SPEED: f64 = 0.2;

    pub const PARTICLE_COLOR: Rgba = Rgba::new(0, 122, 255, 0.8);
    pub const EDGE_COLOR: Rgba = Rgba::new(191, 90, 242, 1.0);

    pub const CANVAS_ID: &str = "blockchain-background";
}
