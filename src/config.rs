//! Plexus tunables
//!
//! Read once at startup. On the web the page may override any subset of fields
//! with a JSON `data-plexus-config` attribute.

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::consts::*;
use crate::error::PlexusError;

/// Configuration for density, edges, motion and colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlexusConfig {
    /// Id of the `<canvas>` element to draw on
    pub canvas_id: String,

    // === Population ===
    /// Surface area (pixels²) per particle
    pub density_divisor: u32,
    /// Smallest particle radius
    pub min_radius: f64,
    /// Radius range above `min_radius`
    pub radius_span: f64,
    /// Largest absolute velocity component (pixels per frame)
    pub max_speed: f64,

    // === Edges ===
    /// Edge threshold is (width / divisor) * (height / divisor)
    pub edge_range_divisor: f64,
    /// Squared distance at which edge opacity reaches zero
    pub edge_falloff: f64,
    pub edge_line_width: f64,

    // === Resize ===
    pub resize_debounce_ms: u32,

    // === Colors ===
    pub particle_color: Rgba,
    /// Edge hue; alpha is replaced per edge
    pub edge_color: Rgba,
}

impl Default for PlexusConfig {
    fn default() -> Self {
        Self {
            canvas_id: CANVAS_ID.to_string(),

            density_divisor: DENSITY_DIVISOR,
            min_radius: MIN_RADIUS,
            radius_span: RADIUS_SPAN,
            max_speed: MAX_SPEED,

            edge_range_divisor: EDGE_RANGE_DIVISOR,
            edge_falloff: EDGE_FALLOFF,
            edge_line_width: EDGE_LINE_WIDTH,

            resize_debounce_ms: RESIZE_DEBOUNCE_MS,

            particle_color: PARTICLE_COLOR,
            edge_color: EDGE_COLOR,
        }
    }
}

impl PlexusConfig {
    /// Attribute holding a JSON override on the page
    pub const DATA_ATTRIBUTE: &'static str = "data-plexus-config";

    /// Parse a (possibly partial) JSON override and validate it
    pub fn from_json(json: &str) -> Result<Self, PlexusError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would divide by zero or produce degenerate particles
    pub fn validate(&self) -> Result<(), PlexusError> {
        if self.density_divisor == 0 {
            return Err(PlexusError::InvalidConfig(
                "density_divisor must be positive".into(),
            ));
        }
        if !(self.edge_range_divisor > 0.0) {
            return Err(PlexusError::InvalidConfig(
                "edge_range_divisor must be positive".into(),
            ));
        }
        if !(self.edge_falloff > 0.0) {
            return Err(PlexusError::InvalidConfig(
                "edge_falloff must be positive".into(),
            ));
        }
        if !(self.min_radius > 0.0) || !(self.radius_span >= 0.0) {
            return Err(PlexusError::InvalidConfig(
                "particle radius must be positive".into(),
            ));
        }
        if !(self.max_speed >= 0.0) {
            return Err(PlexusError::InvalidConfig(
                "max_speed must not be negative".into(),
            ));
        }
        if !(self.edge_line_width >= 0.0) {
            return Err(PlexusError::InvalidConfig(
                "edge_line_width must not be negative".into(),
            ));
        }
        Ok(())
    }

    /// Load the page override (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let selector = format!("[{}]", Self::DATA_ATTRIBUTE);
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(&selector).ok().flatten())
            .and_then(|el| el.get_attribute(Self::DATA_ATTRIBUTE));

        if let Some(json) = json {
            match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded plexus config from page");
                    return config;
                }
                Err(e) => log::warn!("Ignoring plexus config: {}", e),
            }
        }

        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = PlexusConfig::default();
        assert_eq!(config.density_divisor, 12_000);
        assert_eq!(config.edge_falloff, 25_000.0);
        assert_eq!(config.edge_range_divisor, 8.0);
        assert_eq!(config.resize_debounce_ms, 250);
        assert_eq!(config.canvas_id, "blockchain-background");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = PlexusConfig::from_json(r#"{ "density_divisor": 6000 }"#).unwrap();
        assert_eq!(config.density_divisor, 6000);
        assert_eq!(config.edge_falloff, EDGE_FALLOFF);
        assert_eq!(config.particle_color, PARTICLE_COLOR);
    }

    #[test]
    fn test_color_override() {
        let config = PlexusConfig::from_json(
            r#"{ "edge_color": { "r": 255, "g": 0, "b": 0, "a": 1.0 } }"#,
        )
        .unwrap();
        assert_eq!(config.edge_color, Rgba::new(255, 0, 0, 1.0));
    }

    #[test]
    fn test_rejects_zero_density() {
        let err = PlexusConfig::from_json(r#"{ "density_divisor": 0 }"#).unwrap_err();
        assert!(matches!(err, PlexusError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = PlexusConfig::from_json("{ density").unwrap_err();
        assert!(matches!(err, PlexusError::Config(_)));
    }

    #[test]
    fn test_rejects_nan_falloff() {
        let config = PlexusConfig {
            edge_falloff: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
