use approx::assert_relative_eq;
use drone_flight::components::{BoundingBox, VehicleState};
use nalgebra::Vector3;

/// Assert that every field of the vehicle state is finite and the altitude
/// target is non-negative
#[track_caller]
pub fn assert_vehicle_state_valid(state: &VehicleState) {
    assert!(
        state.position.iter().all(|x| x.is_finite()),
        "Position is not finite: {:?}",
        state.position
    );
    assert!(
        state.velocity.iter().all(|x| x.is_finite()),
        "Velocity is not finite: {:?}",
        state.velocity
    );
    assert!(state.orientation.pitch.is_finite(), "Pitch is not finite");
    assert!(state.orientation.yaw.is_finite(), "Yaw is not finite");
    assert!(state.orientation.roll.is_finite(), "Roll is not finite");
    assert!(
        state.desired_altitude() >= 0.0,
        "Desired altitude below ground: {}",
        state.desired_altitude()
    );
    assert!(state.position.y >= 0.0, "Vehicle below ground");
}

#[track_caller]
pub fn assert_vector_eq(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert_relative_eq!(*actual, *expected, epsilon = epsilon);
}

/// Assert that the vehicle's hull box does not overlap `obstacle`
#[track_caller]
pub fn assert_hull_clear(state: &VehicleState, half_extents: &Vector3<f64>, obstacle: &BoundingBox) {
    let hull = BoundingBox::from_hull(half_extents, &state.position, &state.attitude);
    assert!(
        !hull.intersects(obstacle),
        "Hull {:?} overlaps obstacle {:?}",
        hull,
        obstacle
    );
}
