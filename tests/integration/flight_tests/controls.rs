use approx::assert_relative_eq;
use drone_flight::components::{ControlAxes, ControlKey, HeldInputs};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::f64::consts::PI;

use crate::common::{assert_vehicle_state_valid, TestAppBuilder};

#[test]
fn test_unknown_control_is_ignored() {
    let mut app = TestAppBuilder::new().build();
    app.run_frame();
    let before = app.sim.vehicle().clone();

    assert!(!app.sim.set_control_input("q", true));
    assert!(!app.sim.set_control_input("", true));
    app.run_frame();

    let held = app.get_state::<HeldInputs>().unwrap();
    assert!(held.is_empty());
    assert_eq!(app.sim.vehicle().orientation, before.orientation);
    assert_eq!(app.sim.vehicle().desired_altitude(), before.desired_altitude());
}

#[test]
fn test_identifiers_ignore_case() {
    let mut app = TestAppBuilder::new().build();
    assert!(app.sim.set_control_input("W", true));
    assert!(app.sim.set_control_input("arrowleft", true));
    app.run_frame();

    let held = app.get_state::<HeldInputs>().unwrap();
    assert!(held.is_held(ControlKey::W));
    assert!(held.is_held(ControlKey::ArrowLeft));
    assert_relative_eq!(app.sim.vehicle().orientation.pitch, -0.05);
    assert_relative_eq!(app.sim.vehicle().orientation.roll, PI);

    assert!(app.sim.set_control_input("w", false));
    app.run_frame();
    assert!(!app.get_state::<HeldInputs>().unwrap().is_held(ControlKey::W));
    assert_relative_eq!(app.sim.vehicle().orientation.pitch, 0.0);
}

#[test]
fn test_held_yaw_accumulates() {
    let mut app = TestAppBuilder::new().build();
    let start = app.sim.vehicle().orientation.yaw;
    app.press(ControlKey::A);
    app.run_steps(10);
    app.release(ControlKey::A);
    app.run_steps(10);

    assert_relative_eq!(app.sim.vehicle().orientation.yaw, start + 0.5, epsilon = 1e-12);
}

#[test]
fn test_flips_cancel_when_both_held() {
    let mut app = TestAppBuilder::new().build();
    app.press(ControlKey::ArrowUp);
    app.run_frame();
    assert_relative_eq!(app.sim.vehicle().orientation.pitch, PI);

    app.press(ControlKey::ArrowDown);
    app.run_frame();
    assert_relative_eq!(app.sim.vehicle().orientation.pitch, 0.0);

    let axes = *app.get_state::<ControlAxes>().unwrap();
    assert_eq!(axes.pitch_flip, 0.0);
}

#[test]
fn test_random_altitude_input_never_goes_below_ground() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut app = TestAppBuilder::new().build();
    let rate = app.sim.config().controls.altitude_rate;
    let mut expected = app.sim.vehicle().desired_altitude();
    let (mut up, mut down) = (false, false);

    for _ in 0..500 {
        if rng.gen_bool(0.2) {
            up = !up;
            app.sim.set_key(ControlKey::I, up);
        }
        if rng.gen_bool(0.3) {
            down = !down;
            app.sim.set_key(ControlKey::K, down);
        }
        app.run_frame();

        let axis = match (up, down) {
            (true, false) => 5.0,
            (false, true) => -5.0,
            _ => 0.0,
        };
        expected = (expected + axis * rate).max(0.0);

        let vehicle = app.sim.vehicle();
        assert!(vehicle.desired_altitude() >= 0.0);
        assert_relative_eq!(vehicle.desired_altitude(), expected, epsilon = 1e-9);
        assert_vehicle_state_valid(vehicle);
    }
}
