mod controller;

pub use controller::{camera_rig_system, camera_sync_system, camera_toggle_system, derive_rig};
