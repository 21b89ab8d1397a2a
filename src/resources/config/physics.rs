use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::utils::REFERENCE_TICK_RATE;

/// Gains for the hover-style point-mass model.
///
/// All gains are per reference tick; the integrator scales them by
/// `dt * rate_factor` so the feel is the same at any frame rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Constant vertical acceleration (negative is down)
    pub gravity: f64,
    /// Vertical acceleration per unit of altitude error
    pub lift_gain: f64,
    /// Forward thrust per radian of pitch
    pub forward_thrust: f64,
    /// Lateral thrust per radian of roll
    pub lateral_thrust: f64,
    /// Multiplicative velocity damping applied once per tick
    pub damping: f64,
    /// Tick rate the gains were tuned for [Hz]
    pub rate_factor: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: -0.005,
            lift_gain: 0.05,
            forward_thrust: 0.5,
            lateral_thrust: 0.25,
            damping: 0.9,
            rate_factor: REFERENCE_TICK_RATE,
        }
    }
}

impl PhysicsConfig {
    /// Altitude at which lift cancels gravity for a given target altitude.
    pub fn hover_equilibrium(&self, desired_altitude: f64) -> f64 {
        desired_altitude + self.gravity / self.lift_gain
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return Err(ConfigError::invalid(
                "physics.damping",
                format!("must be in (0, 1], got {}", self.damping),
            ));
        }
        if !(self.lift_gain > 0.0) {
            return Err(ConfigError::invalid(
                "physics.lift_gain",
                format!("must be positive, got {}", self.lift_gain),
            ));
        }
        if !(self.rate_factor > 0.0) {
            return Err(ConfigError::invalid(
                "physics.rate_factor",
                format!("must be positive, got {}", self.rate_factor),
            ));
        }
        if !self.gravity.is_finite()
            || !self.forward_thrust.is_finite()
            || !self.lateral_thrust.is_finite()
        {
            return Err(ConfigError::invalid(
                "physics",
                "gravity and thrust gains must be finite",
            ));
        }
        Ok(())
    }
}
