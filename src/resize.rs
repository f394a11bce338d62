//! Debounced viewport resize
//!
//! Resize signals arrive in bursts while a window is dragged. The coordinator
//! keeps a single pending timer slot: each signal cancels the armed timer and
//! arms a new one, so only the last size of a burst is applied, one quiet
//! period after the last signal.

use crate::error::PlexusError;
use crate::sim::SimulationContext;
use crate::surface::Surface;

/// Host timer primitive (`setTimeout` / `clearTimeout` on the web)
pub trait TimerHost {
    type Handle;

    /// Arm a one-shot timer; the host calls back into the coordinator when it
    /// elapses.
    fn arm(&mut self, delay_ms: u32) -> Result<Self::Handle, PlexusError>;

    /// Disarm a timer that has not fired yet
    fn cancel(&mut self, handle: Self::Handle);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingResize<H> {
    handle: H,
    width: u32,
    height: u32,
}

/// Debounces resize signals into a single resize + reseed
#[derive(Debug, Clone)]
pub struct ResizeCoordinator<H> {
    delay_ms: u32,
    pending: Option<PendingResize<H>>,
}

impl<H> ResizeCoordinator<H> {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Record a new viewport size, replacing any pending one
    pub fn signal<T>(&mut self, timers: &mut T, width: u32, height: u32) -> Result<(), PlexusError>
    where
        T: TimerHost<Handle = H>,
    {
        if let Some(previous) = self.pending.take() {
            timers.cancel(previous.handle);
        }
        let handle = timers.arm(self.delay_ms)?;
        self.pending = Some(PendingResize {
            handle,
            width,
            height,
        });
        log::debug!("Resize to {}x{} pending", width, height);
        Ok(())
    }

    /// Timer elapsed: apply the pending size and reseed.
    ///
    /// Returns the new surface, or `None` when nothing was pending.
    pub fn fire(&mut self, ctx: &mut SimulationContext) -> Option<Surface> {
        let pending = self.pending.take()?;
        let surface = ctx.resize_and_reseed(pending.width, pending.height);
        log::info!(
            "Resized to {}x{}, reseeded {} particles",
            surface.width,
            surface.height,
            ctx.field.len()
        );
        Some(surface)
    }
}

/// Virtual-clock timers for headless runs and tests
#[derive(Debug, Clone, Default)]
pub struct ManualTimers {
    now_ms: u64,
    next_handle: u32,
    /// Armed timers as (handle, deadline)
    armed: Vec<(u32, u64)>,
    pub cancelled: u32,
}

impl ManualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn armed(&self) -> usize {
        self.armed.len()
    }

    /// Move the clock forward; returns the handles that elapsed, in deadline order
    pub fn advance(&mut self, ms: u64) -> Vec<u32> {
        self.now_ms += ms;
        let now = self.now_ms;
        let mut due: Vec<(u32, u64)> = Vec::new();
        self.armed.retain(|&(handle, deadline)| {
            if deadline <= now {
                due.push((handle, deadline));
                false
            } else {
                true
            }
        });
        due.sort_by_key(|&(handle, deadline)| (deadline, handle));
        due.into_iter().map(|(handle, _)| handle).collect()
    }
}

impl TimerHost for ManualTimers {
    type Handle = u32;

    fn arm(&mut self, delay_ms: u32) -> Result<u32, PlexusError> {
        self.next_handle += 1;
        self.armed
            .push((self.next_handle, self.now_ms + delay_ms as u64));
        Ok(self.next_handle)
    }

    fn cancel(&mut self, handle: u32) {
        let before = self.armed.len();
        self.armed.retain(|&(h, _)| h != handle);
        if self.armed.len() < before {
            self.cancelled += 1;
        }
    }
}
