use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{
    AutopilotConfig, CameraConfig, CaptureConfig, ConfigError, ControlsConfig, PhysicsConfig,
    VehicleConfig,
};

/// Initial pose of the vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartConfig {
    pub position: Vector3<f64>,
    /// Initial heading [rad]
    pub yaw: f64,
    pub desired_altitude: f64,
}

impl Default for StartConfig {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            yaw: 0.0,
            desired_altitude: 1.0,
        }
    }
}

/// Everything tunable about a flight session. Missing sections and fields
/// fall back to their defaults when deserialized.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    pub physics: PhysicsConfig,
    pub controls: ControlsConfig,
    pub autopilot: AutopilotConfig,
    pub vehicle: VehicleConfig,
    pub camera: CameraConfig,
    pub capture: CaptureConfig,
    pub start: StartConfig,
}

impl FlightConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a `.yaml`, `.yml` or `.json` file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&contents),
            Some("json") => Self::from_json_str(&contents),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }

    pub fn save_yaml(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.physics.validate()?;
        self.autopilot.validate()?;
        self.vehicle.validate()?;
        self.camera.validate()?;
        self.capture.validate()?;

        if !(self.controls.altitude_rate.is_finite()) {
            return Err(ConfigError::invalid(
                "controls.altitude_rate",
                "must be finite",
            ));
        }
        if !(self.start.desired_altitude >= 0.0) {
            return Err(ConfigError::invalid(
                "start.desired_altitude",
                format!("must be non-negative, got {}", self.start.desired_altitude),
            ));
        }
        if self.start.position.iter().any(|c| !c.is_finite()) || !self.start.yaw.is_finite() {
            return Err(ConfigError::invalid("start", "pose must be finite"));
        }
        Ok(())
    }
}
