mod detection;

pub use detection::{collision_resolution_system, find_collision, resolve_collision};
