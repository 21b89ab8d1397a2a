use std::io;
use thiserror::Error;

use crate::components::CaptureError;
use crate::resources::ConfigError;

/// Top level error for building and driving a simulation.
///
/// Nothing inside a tick produces one of these; they only come out of
/// setup (configuration loading) and the tooling around the tick loop.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Capture error: {0}")]
    Capture(#[from] CaptureError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
