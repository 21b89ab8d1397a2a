use nalgebra::Vector3;

/// Tick rate the physics gains were tuned against [Hz]
pub const REFERENCE_TICK_RATE: f64 = 60.0;

/// Nominal frame time at the reference tick rate [s]
pub const REFERENCE_DT: f64 = 1.0 / REFERENCE_TICK_RATE;

/// Vehicle-forward direction in body space (-Z)
pub const BODY_FORWARD: Vector3<f64> = Vector3::new(0.0, 0.0, -1.0);

/// Lateral thrust direction in body space; positive roll slides along it
pub const BODY_LATERAL: Vector3<f64> = Vector3::new(-1.0, 0.0, 0.0);

/// World up (+Y)
pub const WORLD_UP: Vector3<f64> = Vector3::new(0.0, 1.0, 0.0);
