//! Plexus instance: context, loop and resize coordinator wired together
//!
//! Hosts drive it through four entry points: `start` once, `frame` on every
//! animation frame, `on_viewport_resize` for every raw resize signal, and
//! `on_resize_timer` when the debounce timer elapses.

use crate::config::PlexusConfig;
use crate::error::PlexusError;
use crate::renderer::DrawSurface;
use crate::resize::{ResizeCoordinator, TimerHost};
use crate::sim::{FrameScheduler, FrameStats, SimulationContext, SimulationLoop};
use crate::surface::Surface;

/// One running plexus background
#[derive(Debug, Clone)]
pub struct Plexus<H> {
    pub ctx: SimulationContext,
    pub sim: SimulationLoop,
    pub resize: ResizeCoordinator<H>,
}

impl<H> Plexus<H> {
    /// Size the surface from the viewport, then seed the field
    pub fn new(config: &PlexusConfig, seed: u64, viewport_width: u32, viewport_height: u32) -> Self {
        let mut ctx = SimulationContext::new(config, seed);
        ctx.resize_and_reseed(viewport_width, viewport_height);
        log::info!(
            "Plexus seeded {} particles on {}x{} (seed {})",
            ctx.field.len(),
            viewport_width,
            viewport_height,
            seed
        );
        Self {
            ctx,
            sim: SimulationLoop::new(),
            resize: ResizeCoordinator::new(config.resize_debounce_ms),
        }
    }

    pub fn surface(&self) -> Surface {
        self.ctx.surface.surface()
    }

    /// Begin the animation loop
    pub fn start<S: FrameScheduler>(&mut self, scheduler: &mut S) -> Result<(), PlexusError> {
        self.sim.start(scheduler)?;
        log::info!("Plexus running");
        Ok(())
    }

    /// Run one tick
    pub fn frame<D: DrawSurface, S: FrameScheduler>(
        &mut self,
        draw: &mut D,
        scheduler: &mut S,
    ) -> Result<FrameStats, PlexusError> {
        self.sim.tick(&mut self.ctx, draw, scheduler)
    }

    /// Raw viewport change; debounced
    pub fn on_viewport_resize<T>(
        &mut self,
        timers: &mut T,
        width: u32,
        height: u32,
    ) -> Result<(), PlexusError>
    where
        T: TimerHost<Handle = H>,
    {
        self.resize.signal(timers, width, height)
    }

    /// Debounce timer elapsed; returns the new surface if a resize was applied
    pub fn on_resize_timer(&mut self) -> Option<Surface> {
        self.resize.fire(&mut self.ctx)
    }
}
