use bevy::prelude::*;

use crate::components::{Autopilot, ControlAxes, VehicleState};
use crate::resources::FlightConfig;

/// Apply one tick of manual control to the vehicle's attitude targets.
///
/// When `autopilot_owns_attitude` is set, yaw and pitch belong to the
/// autopilot and only roll and the altitude target follow the keys.
pub fn apply_manual_attitude(
    vehicle: &mut VehicleState,
    axes: &ControlAxes,
    autopilot_owns_attitude: bool,
    altitude_rate: f64,
) {
    if !autopilot_owns_attitude {
        vehicle.orientation.yaw += axes.yaw;
        vehicle.orientation.pitch = axes.forward + axes.pitch_flip;
    }
    vehicle.orientation.roll = axes.roll + axes.roll_flip;
    vehicle.adjust_desired_altitude(axes.altitude * altitude_rate);
}

pub fn manual_attitude_system(
    axes: Res<ControlAxes>,
    autopilot: Res<Autopilot>,
    config: Res<FlightConfig>,
    mut vehicle: ResMut<VehicleState>,
) {
    apply_manual_attitude(
        &mut vehicle,
        &axes,
        autopilot.owns_attitude(),
        config.controls.altitude_rate,
    );
}
