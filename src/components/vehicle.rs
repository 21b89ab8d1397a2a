use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::components::AutopilotPhase;
use crate::resources::StartConfig;
use crate::utils::attitude_from_euler;

/// Euler attitude of the vehicle [rad].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
    pub pitch: f64,
    pub yaw: f64,
    pub roll: f64,
}

impl Orientation {
    pub fn new(pitch: f64, yaw: f64, roll: f64) -> Self {
        Self { pitch, yaw, roll }
    }

    pub fn to_attitude(&self) -> UnitQuaternion<f64> {
        attitude_from_euler(self.pitch, self.yaw, self.roll)
    }
}

/// The one vehicle of the session.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleState {
    /// Position in world space, +Y up
    pub position: Vector3<f64>,
    /// Velocity per reference tick
    pub velocity: Vector3<f64>,
    pub orientation: Orientation,
    /// Body-to-world rotation, rebuilt from `orientation` every tick
    pub attitude: UnitQuaternion<f64>,
    desired_altitude: f64,
}

impl Default for VehicleState {
    fn default() -> Self {
        Self::from_start(&StartConfig::default())
    }
}

impl VehicleState {
    pub fn from_start(start: &StartConfig) -> Self {
        let orientation = Orientation::new(0.0, start.yaw, 0.0);
        Self {
            position: start.position,
            velocity: Vector3::zeros(),
            orientation,
            attitude: orientation.to_attitude(),
            desired_altitude: start.desired_altitude.max(0.0),
        }
    }

    pub fn altitude(&self) -> f64 {
        self.position.y
    }

    pub fn desired_altitude(&self) -> f64 {
        self.desired_altitude
    }

    /// Set the altitude target; negative targets clamp to the ground.
    pub fn set_desired_altitude(&mut self, altitude: f64) {
        self.desired_altitude = if altitude.is_nan() { 0.0 } else { altitude.max(0.0) };
    }

    pub fn adjust_desired_altitude(&mut self, delta: f64) {
        self.set_desired_altitude(self.desired_altitude + delta);
    }

    pub fn refresh_attitude(&mut self) {
        self.attitude = self.orientation.to_attitude();
    }
}

/// Most recent position that did not intersect any obstacle.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct LastSafePose {
    pub position: Vector3<f64>,
}

impl LastSafePose {
    pub fn new(position: Vector3<f64>) -> Self {
        Self { position }
    }
}

/// Read-only snapshot for UI layers and autonomous clients.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleTelemetry {
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
    pub orientation: Orientation,
    /// Distance moved over the last tick divided by its duration
    pub speed: f64,
    pub desired_altitude: f64,
    pub autopilot: AutopilotPhase,
    pub colliding: bool,
    #[serde(skip)]
    previous_position: Vector3<f64>,
}

impl VehicleTelemetry {
    pub fn new(state: &VehicleState) -> Self {
        Self {
            position: state.position,
            velocity: state.velocity,
            orientation: state.orientation,
            speed: 0.0,
            desired_altitude: state.desired_altitude(),
            autopilot: AutopilotPhase::Idle,
            colliding: false,
            previous_position: state.position,
        }
    }

    /// Take a new snapshot after a tick of `dt` seconds.
    pub fn record(&mut self, state: &VehicleState, phase: AutopilotPhase, colliding: bool, dt: f64) {
        self.speed = if dt > 0.0 {
            (state.position - self.previous_position).norm() / dt
        } else {
            0.0
        };
        self.previous_position = state.position;
        self.position = state.position;
        self.velocity = state.velocity;
        self.orientation = state.orientation;
        self.desired_altitude = state.desired_altitude();
        self.autopilot = phase;
        self.colliding = colliding;
    }
}
