use serde::{Deserialize, Serialize};

use super::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Desired-altitude change per tick per unit of altitude axis
    pub altitude_rate: f64,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            altitude_rate: 0.05,
        }
    }
}

/// Step sizes for the turn-then-advance autopilot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutopilotConfig {
    /// Largest yaw change per tick while turning [rad]
    pub turn_step: f64,
    /// Remaining heading error below which turning is complete [rad]
    pub heading_tolerance: f64,
    /// Distance credited per tick while advancing
    pub distance_step: f64,
    /// Pitch held while advancing [rad]
    pub forward_bias: f64,
}

impl Default for AutopilotConfig {
    fn default() -> Self {
        Self {
            turn_step: 0.05,
            heading_tolerance: 0.01,
            distance_step: 0.1,
            forward_bias: 0.02,
        }
    }
}

impl AutopilotConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.turn_step > 0.0) {
            return Err(ConfigError::invalid(
                "autopilot.turn_step",
                format!("must be positive, got {}", self.turn_step),
            ));
        }
        if !(self.heading_tolerance > 0.0) {
            return Err(ConfigError::invalid(
                "autopilot.heading_tolerance",
                format!("must be positive, got {}", self.heading_tolerance),
            ));
        }
        // A zero step would leave goals advancing forever.
        if !(self.distance_step > 0.0) {
            return Err(ConfigError::invalid(
                "autopilot.distance_step",
                format!("must be positive, got {}", self.distance_step),
            ));
        }
        if !self.forward_bias.is_finite() {
            return Err(ConfigError::invalid(
                "autopilot.forward_bias",
                "must be finite",
            ));
        }
        Ok(())
    }
}
