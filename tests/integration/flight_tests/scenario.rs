use approx::assert_relative_eq;
use drone_flight::{
    components::{AutopilotPhase, ControlKey},
    utils::REFERENCE_DT,
};

use crate::common::{assert_vehicle_state_valid, reference_hover_altitudes, TestAppBuilder};

#[test]
fn test_hover_trace_from_rest() {
    let mut app = TestAppBuilder::new().build();
    let reference = reference_hover_altitudes(60, REFERENCE_DT, 1.0);

    for expected in &reference {
        app.run_frame();
        let vehicle = app.sim.vehicle();
        assert_vehicle_state_valid(vehicle);
        assert_relative_eq!(vehicle.position.y, *expected, epsilon = 1e-9);
        assert_eq!(vehicle.position.x, 0.0);
        assert_eq!(vehicle.position.z, 0.0);
    }

    assert_relative_eq!(
        app.sim.vehicle().position.y,
        0.8614866876494788,
        epsilon = 1e-9
    );
}

#[test]
fn test_hover_settles_below_target() {
    let mut app = TestAppBuilder::new().build();
    app.run_steps(1200);

    let vehicle = app.sim.vehicle();
    let equilibrium = app.sim.config().physics.hover_equilibrium(1.0);
    assert_relative_eq!(equilibrium, 0.9, epsilon = 1e-12);
    assert_relative_eq!(vehicle.position.y, equilibrium, epsilon = 1e-6);
    assert!(vehicle.velocity.norm() < 1e-6);
}

#[test]
fn test_hover_is_frame_rate_independent() {
    let mut fast = TestAppBuilder::new().with_time_step(1.0 / 120.0).build();
    let mut slow = TestAppBuilder::new().with_time_step(1.0 / 30.0).build();
    fast.run_steps(2400);
    slow.run_steps(600);

    // Same equilibrium whatever the tick rate
    assert_relative_eq!(fast.sim.vehicle().position.y, 0.9, epsilon = 1e-4);
    assert_relative_eq!(slow.sim.vehicle().position.y, 0.9, epsilon = 1e-4);
}

#[test]
fn test_telemetry_reports_speed() {
    let mut app = TestAppBuilder::new().build();
    app.run_frame();
    let first = app.sim.telemetry();
    assert_relative_eq!(first.speed, first.position.y / REFERENCE_DT, epsilon = 1e-9);

    let before = app.sim.vehicle().position;
    app.run_frame();
    let telemetry = app.sim.telemetry();
    let moved = (telemetry.position - before).norm();
    assert_relative_eq!(telemetry.speed, moved / REFERENCE_DT, epsilon = 1e-9);
    assert_eq!(telemetry.autopilot, AutopilotPhase::Idle);
    assert!(!telemetry.colliding);

    app.sim.tick(0.0);
    assert_eq!(app.sim.telemetry().speed, 0.0);
}

#[test]
fn test_telemetry_serializes() {
    let mut app = TestAppBuilder::new().build();
    app.run_steps(3);
    let json = serde_json::to_value(app.sim.telemetry()).unwrap();
    assert_eq!(json["autopilot"], "Idle");
    assert!(json["position"].is_array());
    assert!(json.get("previous_position").is_none());
}

#[test]
fn test_forward_and_back_are_opposite() {
    let mut forward = TestAppBuilder::new().build();
    let mut back = TestAppBuilder::new().build();
    forward.press(ControlKey::W);
    back.press(ControlKey::S);
    forward.run_steps(60);
    back.run_steps(60);

    let f = forward.sim.vehicle().position;
    let b = back.sim.vehicle().position;
    assert!(f.z.abs() > 0.1);
    assert_relative_eq!(f.z, -b.z, epsilon = 1e-9);
    assert_relative_eq!(f.x, 0.0, epsilon = 1e-12);
}

#[test]
fn test_yaw_turns_travel_direction() {
    let mut straight = TestAppBuilder::new().build();
    let mut turned = TestAppBuilder::new().build();
    straight.press(ControlKey::S);
    turned.press(ControlKey::S);
    turned.press(ControlKey::A);
    straight.run_steps(30);
    turned.run_steps(30);

    assert_relative_eq!(straight.sim.vehicle().position.x, 0.0, epsilon = 1e-12);
    assert!(turned.sim.vehicle().position.x.abs() > 0.01);
    assert_relative_eq!(turned.sim.vehicle().orientation.yaw, 1.5, epsilon = 1e-9);
}
