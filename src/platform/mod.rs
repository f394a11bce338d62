//! Platform abstraction layer
//!
//! The browser host supplies:
//! - The canvas 2D drawing surface
//! - `requestAnimationFrame` as the frame scheduler
//! - `setTimeout` / `clearTimeout` as resize debounce timers
//! - Window resize notifications
//!
//! Native builds have no host here; the binary runs headless instead.

#[cfg(target_arch = "wasm32")]
pub mod web;
