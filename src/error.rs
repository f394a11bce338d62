//! Error types for the plexus background.
//!
//! Initialization failures (no window, no canvas, no 2D context) are fatal and
//! returned to the embedding page. Per-frame drawing failures are fatal as well;
//! nothing here is retried.

use std::fmt;

/// Errors raised while booting or driving the simulation.
#[derive(Debug)]
pub enum PlexusError {
    /// No global `window` object (not running in a browser).
    MissingWindow,
    /// The window has no document.
    MissingDocument,
    /// No element with the configured canvas id.
    MissingCanvas(String),
    /// The element with the configured id is not a `<canvas>`.
    NotACanvas(String),
    /// The canvas refused to hand out a 2D rendering context.
    MissingContext,
    /// A drawing call on the surface failed.
    Draw(String),
    /// The host could not arm a timer.
    Timer(String),
    /// The host could not schedule the next frame.
    Scheduler(String),
    /// Registering the viewport resize listener failed.
    Subscribe(String),
    /// Configuration parsed but holds unusable values.
    InvalidConfig(String),
    /// Configuration JSON could not be parsed.
    Config(serde_json::Error),
    /// `start` was called on a loop that is already running.
    LoopAlreadyStarted,
}

impl fmt::Display for PlexusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlexusError::MissingWindow => write!(f, "No browser window available"),
            PlexusError::MissingDocument => write!(f, "Window has no document"),
            PlexusError::MissingCanvas(id) => {
                write!(f, "Canvas element with ID \"{}\" not found", id)
            }
            PlexusError::NotACanvas(id) => write!(f, "Element \"{}\" is not a canvas", id),
            PlexusError::MissingContext => write!(f, "Canvas has no 2D rendering context"),
            PlexusError::Draw(msg) => write!(f, "Drawing failed: {}", msg),
            PlexusError::Timer(msg) => write!(f, "Failed to arm timer: {}", msg),
            PlexusError::Scheduler(msg) => write!(f, "Failed to schedule frame: {}", msg),
            PlexusError::Subscribe(msg) => {
                write!(f, "Failed to subscribe to resize events: {}", msg)
            }
            PlexusError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            PlexusError::Config(e) => write!(f, "Failed to parse configuration: {}", e),
            PlexusError::LoopAlreadyStarted => write!(f, "Simulation loop already started"),
        }
    }
}

impl std::error::Error for PlexusError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlexusError::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for PlexusError {
    fn from(e: serde_json::Error) -> Self {
        PlexusError::Config(e)
    }
}

#[cfg(target_arch = "wasm32")]
impl PlexusError {
    /// Describe a thrown JS value
    pub(crate) fn js_message(value: &wasm_bindgen::JsValue) -> String {
        value.as_string().unwrap_or_else(|| format!("{:?}", value))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<PlexusError> for wasm_bindgen::JsValue {
    fn from(e: PlexusError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_missing_canvas_message() {
        let e = PlexusError::MissingCanvas("blockchain-background".into());
        assert_eq!(
            e.to_string(),
            "Canvas element with ID \"blockchain-background\" not found"
        );
    }

    #[test]
    fn test_config_error_has_source() {
        let parse = serde_json::from_str::<u32>("nope").unwrap_err();
        let e = PlexusError::from(parse);
        assert!(e.source().is_some());
        assert!(PlexusError::MissingContext.source().is_none());
    }
}
