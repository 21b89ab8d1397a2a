use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::utils::{deg_to_rad, horizontal_fov};

/// Where finished off-screen frames get compressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncodeMode {
    /// Fire-and-forget on the async compute pool
    Background,
    /// On the tick thread, right after read-back
    Inline,
}

/// Largest accepted capture width or height [px]
pub const MAX_CAPTURE_DIMENSION: u32 = 4096;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    pub enabled: bool,
    pub width: u32,
    pub height: u32,
    /// JPEG quality, 1..=100
    pub quality: u8,
    /// Capture every n-th tick
    pub interval: u32,
    /// Vertical field of view of the capture camera [deg]
    pub vertical_fov_deg: f64,
    pub encode_mode: EncodeMode,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            width: 320,
            height: 240,
            quality: 70,
            interval: 1,
            vertical_fov_deg: 90.0,
            encode_mode: EncodeMode::Background,
        }
    }
}

impl CaptureConfig {
    pub fn aspect(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// Horizontal field of view of the capture camera [rad]
    pub fn horizontal_fov(&self) -> f64 {
        horizontal_fov(deg_to_rad(self.vertical_fov_deg), self.aspect())
    }

    /// Expected read-back size for an RGBA8 target
    pub fn buffer_len(&self) -> usize {
        self.width as usize * self.height as usize * 4
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::invalid(
                "capture.size",
                format!("must be non-zero, got {}x{}", self.width, self.height),
            ));
        }
        if self.width > MAX_CAPTURE_DIMENSION || self.height > MAX_CAPTURE_DIMENSION {
            return Err(ConfigError::invalid(
                "capture.size",
                format!(
                    "at most {} px per side, got {}x{}",
                    MAX_CAPTURE_DIMENSION, self.width, self.height
                ),
            ));
        }
        if !(1..=100).contains(&self.quality) {
            return Err(ConfigError::invalid(
                "capture.quality",
                format!("must be in 1..=100, got {}", self.quality),
            ));
        }
        if self.interval == 0 {
            return Err(ConfigError::invalid("capture.interval", "must be at least 1"));
        }
        if !(self.vertical_fov_deg > 0.0 && self.vertical_fov_deg < 180.0) {
            return Err(ConfigError::invalid(
                "capture.vertical_fov_deg",
                format!("must be in (0, 180), got {}", self.vertical_fov_deg),
            ));
        }
        Ok(())
    }
}
