mod capture;
mod flight;
mod staging;

pub use capture::CapturePlugin;
pub use flight::{FlightPlugin, FlightSet};
pub use staging::{StartupSequencePlugin, StartupStage};
