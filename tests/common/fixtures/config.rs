use drone_flight::resources::{CaptureConfig, EncodeMode, FlightConfig};

/// Default configuration with encoding on the tick thread, so frames land
/// in the same tick they are captured.
pub fn create_inline_config() -> FlightConfig {
    let mut config = FlightConfig::default();
    config.capture.encode_mode = EncodeMode::Inline;
    config
}

/// Inline encoding into a small target to keep tests fast.
pub fn create_small_capture_config(width: u32, height: u32) -> FlightConfig {
    let mut config = create_inline_config();
    config.capture = CaptureConfig {
        width,
        height,
        encode_mode: EncodeMode::Inline,
        ..Default::default()
    };
    config
}

pub fn create_background_config() -> FlightConfig {
    let mut config = create_small_capture_config(32, 24);
    config.capture.encode_mode = EncodeMode::Background;
    config
}
