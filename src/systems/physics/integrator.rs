use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::VehicleState;
use crate::resources::{FlightConfig, PhysicsConfig, SimClock};
use crate::utils::{BODY_FORWARD, BODY_LATERAL};

/// System advancing the vehicle one tick with the hover point-mass model.
pub fn physics_integrator_system(
    clock: Res<SimClock>,
    config: Res<FlightConfig>,
    mut vehicle: ResMut<VehicleState>,
) {
    integrate(&mut vehicle, &config.physics, clock.dt());
}

/// Acceleration per reference tick for the current attitude and altitude error.
pub fn acceleration(vehicle: &VehicleState, config: &PhysicsConfig) -> Vector3<f64> {
    let forward = vehicle.attitude * BODY_FORWARD;
    let lateral = vehicle.attitude * BODY_LATERAL;
    let lift = (vehicle.desired_altitude() - vehicle.position.y) * config.lift_gain;

    Vector3::new(0.0, config.gravity + lift, 0.0)
        + forward * (vehicle.orientation.pitch * config.forward_thrust)
        + lateral * (vehicle.orientation.roll * config.lateral_thrust)
}

/// Semi-implicit Euler step of `dt` seconds.
///
/// Gains are per reference tick, so every rate is scaled by
/// `dt * rate_factor`. Damping is applied once per call.
pub fn integrate(vehicle: &mut VehicleState, config: &PhysicsConfig, dt: f64) {
    vehicle.refresh_attitude();

    let scale = dt * config.rate_factor;
    let accel = acceleration(vehicle, config);

    vehicle.velocity += accel * scale;
    vehicle.velocity *= config.damping;
    vehicle.position += vehicle.velocity * scale;

    // Ground plane
    if vehicle.position.y < 0.0 {
        vehicle.position.y = 0.0;
        vehicle.velocity.y = 0.0;
    }
}
