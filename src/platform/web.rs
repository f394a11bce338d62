//! Browser host
//!
//! Boots the plexus on the configured `<canvas>`, drives it with
//! `requestAnimationFrame`, and debounces window resizes with `setTimeout`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use crate::app::Plexus;
use crate::config::PlexusConfig;
use crate::error::PlexusError;
use crate::renderer::CanvasSurface;
use crate::resize::TimerHost;
use crate::sim::FrameScheduler;
use crate::surface::clamp_viewport;

/// Plexus state shared between the frame, resize and timer callbacks
struct WebPlexus {
    plexus: Plexus<i32>,
    canvas: CanvasSurface,
}

impl WebPlexus {
    /// Apply a debounced resize to both the simulation and the canvas element
    fn apply_pending_resize(&mut self) {
        if let Some(surface) = self.plexus.on_resize_timer() {
            self.canvas.set_size(surface);
        }
    }
}

/// `requestAnimationFrame` scheduler
struct AnimationFrames {
    window: Window,
    app: Rc<RefCell<WebPlexus>>,
}

impl FrameScheduler for AnimationFrames {
    fn request_frame(&mut self) -> Result<(), PlexusError> {
        let app = self.app.clone();
        let closure = Closure::once(move |_time: f64| run_frame(app));
        self.window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .map_err(|e| PlexusError::Scheduler(PlexusError::js_message(&e)))?;
        closure.forget();
        Ok(())
    }
}

/// `setTimeout` / `clearTimeout` around a single shared callback
struct WindowTimers {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl TimerHost for WindowTimers {
    type Handle = i32;

    fn arm(&mut self, delay_ms: u32) -> Result<i32, PlexusError> {
        self.window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                self.callback.as_ref().unchecked_ref(),
                delay_ms.min(i32::MAX as u32) as i32,
            )
            .map_err(|e| PlexusError::Timer(PlexusError::js_message(&e)))
    }

    fn cancel(&mut self, handle: i32) {
        self.window.clear_timeout_with_handle(handle);
    }
}

/// Current viewport size in whole pixels
fn viewport_size(window: &Window) -> (u32, u32) {
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    clamp_viewport(width, height)
}

fn run_frame(app: Rc<RefCell<WebPlexus>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let mut frames = AnimationFrames {
        window,
        app: app.clone(),
    };

    let result = {
        let mut guard = app.borrow_mut();
        let WebPlexus { plexus, canvas } = &mut *guard;
        plexus.frame(canvas, &mut frames)
    };

    if let Err(e) = result {
        log::error!("Plexus frame failed: {}", e);
        wasm_bindgen::throw_str(&e.to_string());
    }
}

fn subscribe_resize(window: &Window, app: Rc<RefCell<WebPlexus>>) -> Result<(), PlexusError> {
    let timer_app = app.clone();
    let callback = Closure::<dyn FnMut()>::new(move || {
        timer_app.borrow_mut().apply_pending_resize();
    });
    let mut timers = WindowTimers {
        window: window.clone(),
        callback,
    };

    let listener_window = window.clone();
    let listener = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
        let (width, height) = viewport_size(&listener_window);
        if let Err(e) = app
            .borrow_mut()
            .plexus
            .on_viewport_resize(&mut timers, width, height)
        {
            log::error!("Resize dropped: {}", e);
        }
    });
    window
        .add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())
        .map_err(|e| PlexusError::Subscribe(PlexusError::js_message(&e)))?;
    listener.forget();
    Ok(())
}

/// Boot the plexus. Fails before building anything if the page has no usable
/// canvas.
pub fn run(config: PlexusConfig) -> Result<(), PlexusError> {
    config.validate()?;

    let window = web_sys::window().ok_or(PlexusError::MissingWindow)?;
    let document = window.document().ok_or(PlexusError::MissingDocument)?;

    let canvas: HtmlCanvasElement = document
        .get_element_by_id(&config.canvas_id)
        .ok_or_else(|| PlexusError::MissingCanvas(config.canvas_id.clone()))?
        .dyn_into()
        .map_err(|_| PlexusError::NotACanvas(config.canvas_id.clone()))?;

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|_| PlexusError::MissingContext)?
        .ok_or(PlexusError::MissingContext)?
        .dyn_into()
        .map_err(|_| PlexusError::MissingContext)?;

    let (width, height) = viewport_size(&window);
    let seed = js_sys::Date::now() as u64;
    let plexus = Plexus::new(&config, seed, width, height);

    let surface = CanvasSurface::new(canvas, ctx);
    surface.set_size(plexus.surface());

    let app = Rc::new(RefCell::new(WebPlexus {
        plexus,
        canvas: surface,
    }));

    subscribe_resize(&window, app.clone())?;

    let mut frames = AnimationFrames {
        window,
        app: app.clone(),
    };
    app.borrow_mut().plexus.start(&mut frames)?;

    Ok(())
}
