use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleConfig {
    /// Half size of the hull box in body space
    pub half_extents: Vector3<f64>,
}

impl Default for VehicleConfig {
    fn default() -> Self {
        Self {
            half_extents: Vector3::new(0.5, 0.15, 0.5),
        }
    }
}

impl VehicleConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.half_extents.iter().any(|e| !(*e >= 0.0) || !e.is_finite()) {
            return Err(ConfigError::invalid(
                "vehicle.half_extents",
                format!("must be finite and non-negative, got {:?}", self.half_extents),
            ));
        }
        Ok(())
    }
}
