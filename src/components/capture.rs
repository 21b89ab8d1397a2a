use base64::Engine;
use bevy::prelude::*;
use chrono::{DateTime, Utc};
use crossbeam_channel::{Receiver, Sender};
use image::{codecs::jpeg::JpegEncoder, DynamicImage, RgbaImage};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::rendering::{OffscreenTarget, RenderError};

#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("Render failed: {0}")]
    Render(#[from] RenderError),
    #[error("Read-back returned {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
    #[error("Encoding failed: {0}")]
    Encode(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameFormat {
    Jpeg,
}

impl FrameFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            FrameFormat::Jpeg => "image/jpeg",
        }
    }
}

/// Read-back pixels already in top-down row order, waiting to be encoded.
#[derive(Debug, Clone, PartialEq)]
pub struct RawFrame {
    pub sequence: u64,
    pub width: u32,
    pub height: u32,
    /// RGBA8, top row first
    pub pixels: Vec<u8>,
    pub captured_at: DateTime<Utc>,
}

impl RawFrame {
    /// Validate a bottom-up read-back against `target` and flip it upright.
    pub fn from_readback(
        sequence: u64,
        target: &OffscreenTarget,
        pixels: Vec<u8>,
        captured_at: DateTime<Utc>,
    ) -> Result<Self, CaptureError> {
        if pixels.len() != target.buffer_len() {
            return Err(CaptureError::BufferSize {
                expected: target.buffer_len(),
                actual: pixels.len(),
            });
        }
        Ok(Self {
            sequence,
            width: target.width,
            height: target.height,
            pixels: flip_rows(&pixels, target.row_bytes()),
            captured_at,
        })
    }

    pub fn encode(self, quality: u8) -> Result<CapturedFrame, CaptureError> {
        let data = encode_jpeg(self.pixels, self.width, self.height, quality)?;
        Ok(CapturedFrame {
            sequence: self.sequence,
            width: self.width,
            height: self.height,
            format: FrameFormat::Jpeg,
            data,
            captured_at: self.captured_at,
        })
    }
}

/// Reverse the row order of a packed image.
pub fn flip_rows(pixels: &[u8], row_bytes: usize) -> Vec<u8> {
    if row_bytes == 0 {
        return pixels.to_vec();
    }
    pixels
        .chunks_exact(row_bytes)
        .rev()
        .flatten()
        .copied()
        .collect()
}

/// Compress top-down RGBA8 pixels to JPEG; alpha is dropped first.
pub fn encode_jpeg(
    rgba: Vec<u8>,
    width: u32,
    height: u32,
    quality: u8,
) -> Result<Vec<u8>, CaptureError> {
    let expected = width as usize * height as usize * 4;
    let actual = rgba.len();
    let image = RgbaImage::from_raw(width, height, rgba)
        .ok_or(CaptureError::BufferSize { expected, actual })?;
    let rgb = DynamicImage::ImageRgba8(image).to_rgb8();

    let mut data = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut data, quality.clamp(1, 100));
    encoder.encode_image(&rgb)?;
    Ok(data)
}

/// An encoded still from the vehicle's reversed first-person view.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedFrame {
    pub sequence: u64,
    pub width: u32,
    pub height: u32,
    pub format: FrameFormat,
    pub data: Vec<u8>,
    pub captured_at: DateTime<Utc>,
}

impl CapturedFrame {
    pub fn to_base64(&self) -> String {
        base64::prelude::BASE64_STANDARD.encode(&self.data)
    }

    /// Payload for the vision client.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "frame": self.to_base64(),
            "width": self.width,
            "height": self.height,
            "sequence": self.sequence,
            "format": self.format.mime_type(),
            "captured_at": self.captured_at.to_rfc3339(),
        })
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), CaptureError> {
        std::fs::write(path, &self.data)?;
        Ok(())
    }
}

/// Single-entry holder of the newest frame. Out-of-order completions with an
/// older sequence are rejected.
#[derive(Resource, Debug, Clone, Default)]
pub struct CaptureSlot {
    frame: Option<CapturedFrame>,
}

impl CaptureSlot {
    pub fn latest(&self) -> Option<&CapturedFrame> {
        self.frame.as_ref()
    }

    pub fn latest_sequence(&self) -> Option<u64> {
        self.frame.as_ref().map(|f| f.sequence)
    }

    /// Store `frame` if it is newer than the current one.
    pub fn offer(&mut self, frame: CapturedFrame) -> bool {
        match &self.frame {
            Some(current) if current.sequence >= frame.sequence => false,
            _ => {
                self.frame = Some(frame);
                true
            }
        }
    }
}

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureStats {
    pub dispatched: u64,
    pub completed: u64,
    pub dropped_stale: u64,
    pub failed: u64,
}

impl CaptureStats {
    /// Dispatched frames that have neither landed nor failed yet.
    pub fn in_flight(&self) -> u64 {
        self.dispatched
            .saturating_sub(self.completed + self.dropped_stale + self.failed)
    }
}

#[derive(Debug)]
pub enum CaptureOutcome {
    Encoded(CapturedFrame),
    Failed { sequence: u64, error: CaptureError },
}

impl CaptureOutcome {
    pub fn sequence(&self) -> u64 {
        match self {
            CaptureOutcome::Encoded(frame) => frame.sequence,
            CaptureOutcome::Failed { sequence, .. } => *sequence,
        }
    }
}

/// Sequencing and the encode result channel for off-screen capture.
#[derive(Resource)]
pub struct CapturePipeline {
    pub target: OffscreenTarget,
    next_sequence: u64,
    ticks_since_capture: u32,
    sender: Sender<CaptureOutcome>,
    receiver: Receiver<CaptureOutcome>,
}

impl CapturePipeline {
    pub fn new(target: OffscreenTarget) -> Self {
        let (sender, receiver) = crossbeam_channel::unbounded();
        Self {
            target,
            next_sequence: 1,
            ticks_since_capture: 0,
            sender,
            receiver,
        }
    }

    /// Count a tick and report whether this one should capture.
    pub fn tick(&mut self, interval: u32) -> bool {
        self.ticks_since_capture += 1;
        if self.ticks_since_capture >= interval.max(1) {
            self.ticks_since_capture = 0;
            true
        } else {
            false
        }
    }

    pub fn next_sequence(&mut self) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        sequence
    }

    pub fn sender(&self) -> Sender<CaptureOutcome> {
        self.sender.clone()
    }

    /// Everything finished so far, without blocking.
    pub fn drain(&self) -> Vec<CaptureOutcome> {
        self.receiver.try_iter().collect()
    }

    pub fn receiver(&self) -> &Receiver<CaptureOutcome> {
        &self.receiver
    }
}
