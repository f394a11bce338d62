//! Per-frame simulation loop
//!
//! One tick: clear the surface, advance (and draw) every particle, draw the
//! proximity edges, then ask the host for the next frame. All particles move
//! before any edge is measured, so edges always reflect this tick's positions.

use super::context::SimulationContext;
use crate::error::PlexusError;
use crate::renderer::DrawSurface;

/// Host primitive that invokes the next tick once per display refresh
pub trait FrameScheduler {
    fn request_frame(&mut self) -> Result<(), PlexusError>;
}

/// Loop lifecycle. There is no stop transition; a host that needs teardown
/// simply stops delivering frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    #[default]
    Idle,
    Running,
}

/// Counters for one completed tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    /// 1-based tick number
    pub frame: u64,
    pub particles: usize,
    pub edges: usize,
}

/// Drives ticks for a `SimulationContext`
#[derive(Debug, Clone, Default)]
pub struct SimulationLoop {
    state: LoopState,
    frames: u64,
}

impl SimulationLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Ticks completed so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Idle -> Running, requesting the first frame. Valid exactly once.
    pub fn start<S: FrameScheduler>(&mut self, scheduler: &mut S) -> Result<(), PlexusError> {
        if self.state == LoopState::Running {
            return Err(PlexusError::LoopAlreadyStarted);
        }
        self.state = LoopState::Running;
        scheduler.request_frame()
    }

    /// Run one tick. Does nothing (and schedules nothing) while idle.
    pub fn tick<D: DrawSurface, S: FrameScheduler>(
        &mut self,
        ctx: &mut SimulationContext,
        draw: &mut D,
        scheduler: &mut S,
    ) -> Result<FrameStats, PlexusError> {
        if self.state == LoopState::Idle {
            return Ok(FrameStats {
                frame: self.frames,
                ..Default::default()
            });
        }

        let surface = ctx.surface.surface();
        draw.clear_rect(0.0, 0.0, surface.width as f64, surface.height as f64);
        ctx.field.advance_all(surface, draw)?;
        let edges = ctx.proximity.render(surface, ctx.field.particles(), draw)?;
        self.frames += 1;

        scheduler.request_frame()?;

        Ok(FrameStats {
            frame: self.frames,
            particles: ctx.field.len(),
            edges,
        })
    }
}

/// Scheduler that only counts requests (headless runs and tests)
#[derive(Debug, Clone, Copy, Default)]
pub struct CountingScheduler {
    pub requests: u64,
}

impl FrameScheduler for CountingScheduler {
    fn request_frame(&mut self) -> Result<(), PlexusError> {
        self.requests += 1;
        Ok(())
    }
}
