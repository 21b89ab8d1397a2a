use drone_flight::components::{ControlKey, LastSafePose, Obstacle};
use nalgebra::Vector3;

use crate::common::{
    assert_hull_clear, assert_vector_eq, assert_vehicle_state_valid, create_wall_x, create_wall_z,
    TestAppBuilder,
};

#[test]
fn test_vehicle_never_enters_wall() {
    let wall = create_wall_x(-3.0, -2.0);
    let mut app = TestAppBuilder::new().with_obstacle(wall).build();
    let half = app.sim.config().vehicle.half_extents;
    // Positive roll slides the vehicle toward -X
    app.press(ControlKey::L);

    let mut collisions = 0;
    for _ in 0..120 {
        app.run_frame();
        let events = app.sim.drain_collision_events();
        let vehicle = app.sim.vehicle();
        assert_vehicle_state_valid(vehicle);
        assert_hull_clear(vehicle, &half, &wall);

        if let Some(event) = events.last() {
            collisions += events.len();
            assert_eq!(vehicle.velocity, Vector3::zeros());
            assert_eq!(vehicle.position, event.restored_position);
            assert!(event.attempted_position.x < event.restored_position.x);
            assert!(app.sim.telemetry().colliding);
        }
    }

    assert!(collisions > 0, "vehicle never reached the wall");
    assert!(app.sim.vehicle().position.x < -1.0);
}

#[test]
fn test_event_names_the_obstacle() {
    let mut app = TestAppBuilder::new().build();
    app.run_frame();
    let wall = app.sim.add_obstacle(create_wall_z(-3.0, -2.5));
    let _far = app.sim.add_obstacle(create_wall_z(40.0, 41.0));
    app.press(ControlKey::S);

    let mut hits = Vec::new();
    for _ in 0..200 {
        app.run_frame();
        hits.extend(app.sim.drain_collision_events());
    }
    // Holding S drifts toward -Z
    assert!(!hits.is_empty());
    assert!(hits.iter().all(|e| e.obstacle == wall));
}

#[test]
fn test_startup_obstacles_are_spawned() {
    let mut app = TestAppBuilder::new()
        .with_obstacle(create_wall_x(10.0, 11.0))
        .with_obstacle(create_wall_z(10.0, 11.0))
        .build();
    app.run_frame();
    assert_eq!(app.query_all::<Obstacle>().len(), 2);
}

#[test]
fn test_clear_flight_updates_last_safe_pose() {
    let mut app = TestAppBuilder::new()
        .with_obstacle(create_wall_x(20.0, 21.0))
        .build();
    app.run_steps(10);
    assert!(app.sim.drain_collision_events().is_empty());
    assert!(!app.sim.telemetry().colliding);

    let last_safe = app.get_state::<LastSafePose>().unwrap().position;
    assert_vector_eq(&last_safe, &app.sim.vehicle().position, 0.0);
}
