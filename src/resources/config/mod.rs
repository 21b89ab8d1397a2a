pub mod camera;
pub mod capture;
pub mod controls;
mod errors;
pub mod physics;
pub mod simulation;
pub mod vehicle;

pub use camera::CameraConfig;
pub use capture::{CaptureConfig, EncodeMode, MAX_CAPTURE_DIMENSION};
pub use controls::{AutopilotConfig, ControlsConfig};
pub use errors::ConfigError;
pub use physics::PhysicsConfig;
pub use simulation::{FlightConfig, StartConfig};
pub use vehicle::VehicleConfig;
