//! Per-object grab configuration

use serde::{Deserialize, Serialize};

use crate::error::{GrabConfigError, Result};

/// Default reach limit, in meters
pub const DEFAULT_MAX_GRAB_DISTANCE: f32 = 0.5;

/// Settings for one manipulable object
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrabConfig {
    /// Max distance between the object and the centroid of its contacts
    pub max_grab_distance: f32,
    /// Start with rotation amplification on
    pub double_rotation: bool,
}

impl Default for GrabConfig {
    fn default() -> Self {
        Self {
            max_grab_distance: DEFAULT_MAX_GRAB_DISTANCE,
            double_rotation: false,
        }
    }
}

impl GrabConfig {
    pub fn with_max_grab_distance(mut self, distance: f32) -> Self {
        self.max_grab_distance = distance;
        self
    }

    pub fn with_double_rotation(mut self, enabled: bool) -> Self {
        self.double_rotation = enabled;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.max_grab_distance.is_finite() || self.max_grab_distance <= 0.0 {
            return Err(GrabConfigError::InvalidMaxGrabDistance(self.max_grab_distance));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GrabConfig::default();
        assert_eq!(config.max_grab_distance, 0.5);
        assert!(!config.double_rotation);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_distance() {
        for bad in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let config = GrabConfig::default().with_max_grab_distance(bad);
            assert!(matches!(
                config.validate(),
                Err(GrabConfigError::InvalidMaxGrabDistance(_))
            ));
        }
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: GrabConfig = toml::from_str("double_rotation = true").expect("parse");
        assert!(config.double_rotation);
        assert_eq!(config.max_grab_distance, DEFAULT_MAX_GRAB_DISTANCE);
    }
}
