use bevy::prelude::*;

use crate::components::{Autopilot, CollisionState, VehicleState, VehicleTelemetry};
use crate::resources::SimClock;

pub fn telemetry_system(
    clock: Res<SimClock>,
    vehicle: Res<VehicleState>,
    autopilot: Res<Autopilot>,
    collision: Res<CollisionState>,
    mut telemetry: ResMut<VehicleTelemetry>,
) {
    telemetry.record(&vehicle, autopilot.phase(), collision.colliding, clock.dt());
}
