pub mod config;
mod time;

pub use config::{
    AutopilotConfig, CameraConfig, CaptureConfig, ConfigError, ControlsConfig, EncodeMode,
    FlightConfig, PhysicsConfig, StartConfig, VehicleConfig,
};
pub use time::{realtime_clock_system, SimClock, UpdateMode};
