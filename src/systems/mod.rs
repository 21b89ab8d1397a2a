mod autopilot;
mod camera;
mod capture;
mod collisions;
mod controller;
pub mod physics;
mod telemetry;

pub use autopilot::autopilot_system;
pub use camera::{camera_rig_system, camera_sync_system, camera_toggle_system, derive_rig};
pub use capture::{
    capture_collect_system, capture_dispatch_system, deliver_inline, encode_outcome,
    primary_render_system, read_frame, record_outcome,
};
pub use collisions::{collision_resolution_system, find_collision, resolve_collision};
pub use controller::{
    apply_manual_attitude, control_mapping_system, keyboard_input_system, manual_attitude_system,
};
pub use physics::{integrate, physics_integrator_system};
pub use telemetry::telemetry_system;
