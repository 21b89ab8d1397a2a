use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{
    CameraPose, CameraRig, CameraSelection, RigCamera, ToggleCameraView, VehicleState,
};
use crate::resources::{CameraConfig, FlightConfig};
use crate::utils::{look_rotation, to_transform, yaw_flip};

/// Derive all three camera poses from the vehicle's world transform.
///
/// The chase camera keeps the direction it had relative to the vehicle and
/// is pulled back out to `chase_radius`.
pub fn derive_rig(
    previous_chase: &Vector3<f64>,
    vehicle: &VehicleState,
    config: &CameraConfig,
) -> CameraRig {
    let offset = previous_chase - vehicle.position;
    let direction = if offset.norm() > f64::EPSILON && offset.iter().all(|c| c.is_finite()) {
        offset.normalize()
    } else {
        config.chase_default_direction.normalize()
    };
    let chase_position = vehicle.position + direction * config.chase_radius;
    let chase = CameraPose::new(
        chase_position,
        look_rotation(&chase_position, &vehicle.position),
    );

    let reversed = vehicle.attitude * yaw_flip();
    let first_person_reversed = CameraPose::new(
        vehicle.position + vehicle.attitude * config.first_person_offset,
        reversed,
    );
    let ventral = CameraPose::new(
        vehicle.position + vehicle.attitude * config.ventral_offset,
        reversed,
    );

    CameraRig {
        chase,
        first_person_reversed,
        ventral,
    }
}

pub fn camera_toggle_system(
    mut toggles: EventReader<ToggleCameraView>,
    mut selection: ResMut<CameraSelection>,
) {
    for ToggleCameraView(toggle) in toggles.read() {
        selection.toggle(*toggle);
        info!("Camera view: {:?}", selection.active());
    }
}

pub fn camera_rig_system(
    vehicle: Res<VehicleState>,
    config: Res<FlightConfig>,
    mut rig: ResMut<CameraRig>,
) {
    let previous_chase = rig.chase.position;
    *rig = derive_rig(&previous_chase, &vehicle, &config.camera);
}

/// Copy rig poses onto the ECS cameras and enable only the selected one.
pub fn camera_sync_system(
    rig: Res<CameraRig>,
    selection: Res<CameraSelection>,
    mut cameras: Query<(&RigCamera, &mut Transform, Option<&mut Camera>)>,
) {
    let active = selection.active();
    for (RigCamera(view), mut transform, camera) in cameras.iter_mut() {
        let pose = rig.pose(*view);
        *transform = to_transform(&pose.position, &pose.rotation);
        if let Some(mut camera) = camera {
            camera.is_active = *view == active;
        }
    }
}
