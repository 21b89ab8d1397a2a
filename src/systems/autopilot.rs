use bevy::prelude::*;

use crate::components::{Autopilot, AutopilotCommand, VehicleState};
use crate::resources::FlightConfig;

/// Applies queued goal commands in arrival order, then steps the machine.
pub fn autopilot_system(
    mut commands: EventReader<AutopilotCommand>,
    mut autopilot: ResMut<Autopilot>,
    mut vehicle: ResMut<VehicleState>,
    config: Res<FlightConfig>,
) {
    for command in commands.read() {
        autopilot.apply(*command);
    }

    if autopilot.is_active() {
        autopilot.step(&mut vehicle.orientation, &config.autopilot);
    }
}
