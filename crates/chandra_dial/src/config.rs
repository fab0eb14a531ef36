//! Dial configuration: animation period and scene geometry.
//!
//! All fields are optional in TOML; missing ones take the defaults below.
//!
//! ```toml
//! tick_period_ms = 250
//! scene_size = 800.0
//! ring_inner_radius = 240.0
//! ring_outer_radius = 400.0
//! ```

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::drag::Annulus;
use crate::error::ConfigError;

/// Tunables for the dial controller.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DialConfig {
    /// Auto-advance period in milliseconds; one calendar day per tick.
    #[serde(default = "default_tick_period_ms")]
    pub tick_period_ms: u64,
    /// Side of the square scene in scene units.
    #[serde(default = "default_scene_size")]
    pub scene_size: f64,
    /// Inner radius of the draggable ring, scene units.
    #[serde(default = "default_ring_inner_radius")]
    pub ring_inner_radius: f64,
    /// Outer radius of the draggable ring, scene units.
    #[serde(default = "default_ring_outer_radius")]
    pub ring_outer_radius: f64,
}

fn default_tick_period_ms() -> u64 {
    500
}
fn default_scene_size() -> f64 {
    800.0
}
fn default_ring_inner_radius() -> f64 {
    240.0
}
fn default_ring_outer_radius() -> f64 {
    400.0
}

impl Default for DialConfig {
    fn default() -> Self {
        Self {
            tick_period_ms: default_tick_period_ms(),
            scene_size: default_scene_size(),
            ring_inner_radius: default_ring_inner_radius(),
            ring_outer_radius: default_ring_outer_radius(),
        }
    }
}

impl DialConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded dial config");
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_period_ms == 0 {
            return Err(ConfigError::Invalid("tick_period_ms must be > 0"));
        }
        if !self.scene_size.is_finite() || self.scene_size <= 0.0 {
            return Err(ConfigError::Invalid("scene_size must be positive"));
        }
        if !self.ring_inner_radius.is_finite() || self.ring_inner_radius < 0.0 {
            return Err(ConfigError::Invalid("ring_inner_radius must be >= 0"));
        }
        if !self.ring_outer_radius.is_finite() || self.ring_outer_radius <= self.ring_inner_radius
        {
            return Err(ConfigError::Invalid(
                "ring_outer_radius must exceed ring_inner_radius",
            ));
        }
        Ok(())
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms)
    }

    /// Draggable ring in scene units.
    pub fn annulus(&self) -> Annulus {
        Annulus {
            scene_size: self.scene_size,
            inner: self.ring_inner_radius,
            outer: self.ring_outer_radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let c = DialConfig::default();
        assert!(c.validate().is_ok());
        assert_eq!(c.tick_period(), Duration::from_millis(500));
        assert_eq!(c.annulus().inner, 240.0);
        assert_eq!(c.annulus().outer, 400.0);
    }

    #[test]
    fn empty_toml_gives_defaults() {
        assert_eq!(DialConfig::from_toml_str("").unwrap(), DialConfig::default());
    }

    #[test]
    fn partial_toml() {
        let c = DialConfig::from_toml_str("tick_period_ms = 250").unwrap();
        assert_eq!(c.tick_period_ms, 250);
        assert_eq!(c.scene_size, 800.0);
    }

    #[test]
    fn unknown_field_rejected() {
        let err = DialConfig::from_toml_str("tick_ms = 250").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn zero_period_rejected() {
        let err = DialConfig::from_toml_str("tick_period_ms = 0").unwrap_err();
        assert_eq!(err, ConfigError::Invalid("tick_period_ms must be > 0"));
    }

    #[test]
    fn inverted_annulus_rejected() {
        let c = DialConfig {
            ring_inner_radius: 400.0,
            ring_outer_radius: 240.0,
            ..DialConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = DialConfig::load(Path::new("/nonexistent/chandra.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
