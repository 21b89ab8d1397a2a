use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Pinned distance between the chase camera and the vehicle
    pub chase_radius: f64,
    /// Orbit direction used when the chase camera has no usable offset
    pub chase_default_direction: Vector3<f64>,
    /// First-person mount point in body space
    pub first_person_offset: Vector3<f64>,
    /// Belly mount point in body space
    pub ventral_offset: Vector3<f64>,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            chase_radius: 20.0,
            chase_default_direction: Vector3::new(0.0, 0.0, 1.0),
            first_person_offset: Vector3::new(0.0, 0.5, 1.0),
            ventral_offset: Vector3::new(0.0, -0.2, 0.2),
        }
    }
}

impl CameraConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.chase_radius > 0.0) {
            return Err(ConfigError::invalid(
                "camera.chase_radius",
                format!("must be positive, got {}", self.chase_radius),
            ));
        }
        if self.chase_default_direction.norm() <= f64::EPSILON {
            return Err(ConfigError::invalid(
                "camera.chase_default_direction",
                "must be non-zero",
            ));
        }
        Ok(())
    }
}
