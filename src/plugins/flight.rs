use bevy::prelude::*;

use crate::components::{
    Autopilot, AutopilotCommand, CameraRig, CameraSelection, CameraView, CollisionEvent,
    CollisionState, ControlAxes, ControlInputEvent, HeldInputs, LastSafePose, RigCamera,
    ToggleCameraView, VehicleState, VehicleTelemetry,
};
use crate::plugins::{CapturePlugin, StartupSequencePlugin, StartupStage};
use crate::resources::{realtime_clock_system, FlightConfig, SimClock, UpdateMode};
use crate::systems::{
    autopilot_system, camera_rig_system, camera_sync_system, camera_toggle_system,
    collision_resolution_system, control_mapping_system, derive_rig, keyboard_input_system,
    manual_attitude_system, physics_integrator_system, telemetry_system,
};
use crate::utils::to_transform;

/// One tick of the flight core, in execution order.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub enum FlightSet {
    Input,
    Autopilot,
    Attitude,
    Physics,
    Collision,
    Telemetry,
    Camera,
    Capture,
}

pub struct FlightPlugin {
    pub config: FlightConfig,
    pub mode: UpdateMode,
}

impl FlightPlugin {
    pub fn new(config: FlightConfig, mode: UpdateMode) -> Self {
        Self { config, mode }
    }

    fn spawn_rig_cameras(mut commands: Commands, rig: Res<CameraRig>, mode: UpdateMode) {
        for view in CameraView::ALL {
            let pose = rig.pose(view);
            let mut entity = commands.spawn((
                RigCamera(view),
                to_transform(&pose.position, &pose.rotation),
                Name::new(format!("{:?} Camera", view)),
            ));
            // Headless runs have no render world to attach a real camera to.
            if mode == UpdateMode::Realtime {
                entity.insert((
                    Camera3d::default(),
                    Camera {
                        is_active: view == CameraView::Chase,
                        ..default()
                    },
                ));
            }
        }
    }
}

impl Default for FlightPlugin {
    fn default() -> Self {
        Self::new(FlightConfig::default(), UpdateMode::Stepped)
    }
}

impl Plugin for FlightPlugin {
    fn build(&self, app: &mut App) {
        let vehicle = VehicleState::from_start(&self.config.start);
        let rig = derive_rig(&vehicle.position, &vehicle, &self.config.camera);
        let mode = self.mode;

        app.add_plugins(StartupSequencePlugin)
            .insert_resource(self.config.clone())
            .insert_resource(LastSafePose::new(vehicle.position))
            .insert_resource(VehicleTelemetry::new(&vehicle))
            .insert_resource(vehicle)
            .insert_resource(rig)
            .init_resource::<SimClock>()
            .init_resource::<HeldInputs>()
            .init_resource::<ControlAxes>()
            .init_resource::<Autopilot>()
            .init_resource::<CollisionState>()
            .init_resource::<CameraSelection>()
            .add_event::<ControlInputEvent>()
            .add_event::<AutopilotCommand>()
            .add_event::<CollisionEvent>()
            .add_event::<ToggleCameraView>()
            .configure_sets(
                Update,
                (
                    FlightSet::Input,
                    FlightSet::Autopilot,
                    FlightSet::Attitude,
                    FlightSet::Physics,
                    FlightSet::Collision,
                    FlightSet::Telemetry,
                    FlightSet::Camera,
                    FlightSet::Capture,
                )
                    .chain(),
            )
            .add_systems(
                Startup,
                (move |commands: Commands, rig: Res<CameraRig>| {
                    Self::spawn_rig_cameras(commands, rig, mode)
                })
                    .in_set(StartupStage::BuildCameras),
            )
            .add_systems(
                Update,
                (
                    control_mapping_system.in_set(FlightSet::Input),
                    autopilot_system.in_set(FlightSet::Autopilot),
                    manual_attitude_system.in_set(FlightSet::Attitude),
                    physics_integrator_system.in_set(FlightSet::Physics),
                    collision_resolution_system.in_set(FlightSet::Collision),
                    telemetry_system.in_set(FlightSet::Telemetry),
                    (camera_toggle_system, camera_rig_system, camera_sync_system)
                        .chain()
                        .in_set(FlightSet::Camera),
                ),
            );

        if mode == UpdateMode::Realtime {
            app.add_systems(PreUpdate, realtime_clock_system).add_systems(
                Update,
                keyboard_input_system
                    .before(control_mapping_system)
                    .in_set(FlightSet::Input),
            );
        }

        app.add_plugins(CapturePlugin::new(self.config.capture.clone()));

        info!("Flight core ready ({:?})", mode);
    }
}

