use approx::assert_relative_eq;
use drone_flight::{
    components::{CameraToggle, CameraView, ControlKey, RigCamera},
    utils::{to_transform, yaw_flip},
};
use nalgebra::Vector3;

use crate::common::{assert_vector_eq, TestAppBuilder};

#[test]
fn test_toggle_sequence() {
    let mut app = TestAppBuilder::new().build();
    app.run_frame();
    assert_eq!(app.sim.active_camera(), CameraView::Chase);

    app.sim.toggle_camera_view(CameraToggle::FirstPerson);
    app.run_frame();
    assert_eq!(app.sim.active_camera(), CameraView::FirstPersonReversed);

    app.sim.toggle_camera_view(CameraToggle::Ventral);
    app.run_frame();
    let selection = app.sim.camera_selection();
    assert!(selection.ventral && !selection.first_person);
    assert_eq!(app.sim.active_camera(), CameraView::Ventral);

    app.sim.toggle_camera_view(CameraToggle::Ventral);
    app.run_frame();
    assert_eq!(app.sim.active_camera(), CameraView::Chase);
}

#[test]
fn test_double_toggle_is_identity() {
    for toggle in ["firstPerson", "ventral"] {
        let toggle: CameraToggle = toggle.parse().unwrap();
        let mut app = TestAppBuilder::new().build();
        app.run_frame();
        let before = app.sim.camera_selection();

        app.sim.toggle_camera_view(toggle);
        app.sim.toggle_camera_view(toggle);
        app.run_frame();
        assert_eq!(app.sim.camera_selection(), before);
    }
}

#[test]
fn test_chase_distance_is_pinned() {
    let mut app = TestAppBuilder::new().build();
    let radius = app.sim.config().camera.chase_radius;
    app.press(ControlKey::S);
    app.press(ControlKey::A);
    app.press(ControlKey::I);

    for _ in 0..90 {
        app.run_frame();
        let rig = app.sim.camera_rig();
        let vehicle = app.sim.vehicle();
        assert_relative_eq!(
            (rig.chase.position - vehicle.position).norm(),
            radius,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            rig.chase.view_direction(),
            (vehicle.position - rig.chase.position).normalize(),
            epsilon = 1e-9
        );
    }
}

#[test]
fn test_body_cameras_ride_with_vehicle() {
    let mut app = TestAppBuilder::new().build();
    app.press(ControlKey::A);
    app.press(ControlKey::J);
    app.run_steps(20);

    let config = app.sim.config().camera.clone();
    let vehicle = app.sim.vehicle().clone();
    let rig = *app.sim.camera_rig();

    assert_vector_eq(
        &rig.first_person_reversed.position,
        &(vehicle.position + vehicle.attitude * config.first_person_offset),
        1e-12,
    );
    assert_vector_eq(
        &rig.ventral.position,
        &(vehicle.position + vehicle.attitude * config.ventral_offset),
        1e-12,
    );
    let expected = vehicle.attitude * yaw_flip();
    assert!(rig.first_person_reversed.rotation.angle_to(&expected) < 1e-9);
    assert!(rig.ventral.rotation.angle_to(&expected) < 1e-9);

    let back = vehicle.attitude * Vector3::new(0.0, 0.0, 1.0);
    assert_vector_eq(&rig.first_person_reversed.view_direction(), &back, 1e-9);
}

#[test]
fn test_rig_entities_follow_selection() {
    let mut app = TestAppBuilder::new().build();
    app.sim.toggle_camera_view(CameraToggle::FirstPerson);
    app.run_steps(5);

    let rig = *app.sim.camera_rig();
    let cameras: Vec<_> = app
        .query_all::<RigCamera>()
        .into_iter()
        .map(|(entity, camera)| (entity, *camera))
        .collect();
    assert_eq!(cameras.len(), 3);

    for (entity, RigCamera(view)) in cameras {
        let pose = rig.pose(view);
        let transform = app
            .sim
            .app()
            .world()
            .get::<bevy::prelude::Transform>(entity)
            .unwrap();
        let expected = to_transform(&pose.position, &pose.rotation);
        assert!((transform.translation - expected.translation).length() < 1e-5);
        assert!(transform.rotation.angle_between(expected.rotation) < 1e-5);
    }
}
