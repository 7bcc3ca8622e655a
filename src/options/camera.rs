use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::VitrineError;

/// Camera projection and turntable parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Orbit distance of the wide overview (nothing selected).
    #[schemars(title = "Wide Distance", range(min = 5.0, max = 50.0))]
    pub wide_distance: f32,
    /// Orbit distance while an item is selected.
    #[schemars(title = "Near Distance", range(min = 2.0, max = 50.0))]
    pub near_distance: f32,
    /// Turntable angular speed in radians per second.
    #[schemars(title = "Auto-Rotate Speed", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub auto_rotate_speed: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 70.0,
            znear: 0.1,
            zfar: 500.0,
            wide_distance: 18.0,
            near_distance: 12.0,
            auto_rotate_speed: 0.08,
        }
    }
}

impl CameraOptions {
    /// Reject non-positive distances and backwards clip planes.
    pub fn validate(&self) -> Result<(), VitrineError> {
        let positive =
            |v: f32| v.is_finite() && v > 0.0;
        if !positive(self.wide_distance) || !positive(self.near_distance) {
            return Err(VitrineError::InvalidConfig(format!(
                "camera distances must be positive (wide={}, near={})",
                self.wide_distance, self.near_distance
            )));
        }
        if !positive(self.znear) || self.zfar <= self.znear {
            return Err(VitrineError::InvalidConfig(format!(
                "camera clip planes invalid (znear={}, zfar={})",
                self.znear, self.zfar
            )));
        }
        if !self.auto_rotate_speed.is_finite() || self.auto_rotate_speed < 0.0
        {
            return Err(VitrineError::InvalidConfig(format!(
                "auto-rotate speed must be non-negative (got {})",
                self.auto_rotate_speed
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(CameraOptions::default().validate().is_ok());
    }

    #[test]
    fn rejects_bad_distances() {
        let opts = CameraOptions {
            near_distance: 0.0,
            ..CameraOptions::default()
        };
        assert!(opts.validate().is_err());
    }

    #[test]
    fn rejects_inverted_clip_planes() {
        let opts = CameraOptions {
            znear: 10.0,
            zfar: 1.0,
            ..CameraOptions::default()
        };
        assert!(opts.validate().is_err());
    }
}
