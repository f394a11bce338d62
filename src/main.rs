//! Net Plexus entry point
//!
//! On the web this boots the canvas background. Natively it runs a short
//! headless session (recorded drawing, virtual resize timers) and logs stats.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    log::info!("Net Plexus starting...");
    let config = net_plexus::PlexusConfig::load();
    net_plexus::platform::web::run(config)?;
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Net Plexus (native) starting...");
    log::info!("Native mode is headless - serve the wasm build for the canvas version");

    if let Err(e) = headless::run() {
        log::error!("Headless run failed: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use net_plexus::renderer::RecordingSurface;
    use net_plexus::resize::ManualTimers;
    use net_plexus::sim::CountingScheduler;
    use net_plexus::{Plexus, PlexusConfig, PlexusError};

    /// Display refresh interval at 60 Hz, in whole milliseconds
    const FRAME_MS: u64 = 16;
    const SEED: u64 = 0x5EED;

    pub fn run() -> Result<(), PlexusError> {
        let config = PlexusConfig::load();
        let mut plexus = Plexus::new(&config, SEED, 800, 600);
        let mut draw = RecordingSurface::new();
        let mut frames = CountingScheduler::default();
        let mut timers = ManualTimers::new();

        if let Some(sample) = plexus.ctx.field.particles().first() {
            log::debug!("First particle: {}", serde_json::to_string(sample)?);
        }

        plexus.start(&mut frames)?;

        // Drag the window wider over a few frames, then let it settle
        let drag = [960, 1120, 1280, 1440];
        for frame in 0..60 {
            if let Some(&width) = drag.get(frame) {
                plexus.on_viewport_resize(&mut timers, width, 900)?;
            }
            for _ in timers.advance(FRAME_MS) {
                plexus.on_resize_timer();
            }

            draw.clear();
            let stats = plexus.frame(&mut draw, &mut frames)?;
            if stats.frame % 15 == 1 {
                log::info!(
                    "Frame {}: {} particles, {} edges, {} draw calls",
                    stats.frame,
                    stats.particles,
                    stats.edges,
                    draw.commands.len()
                );
            }
        }

        let surface = plexus.surface();
        log::info!(
            "Done: {} frames on {}x{}, {} resize timers cancelled",
            plexus.sim.frames(),
            surface.width,
            surface.height,
            timers.cancelled
        );
        Ok(())
    }
}
