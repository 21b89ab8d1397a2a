use super::{OffscreenTarget, RenderError, RenderTarget, SceneRenderer};
use crate::components::CameraPose;

/// GPU-less renderer producing a vertical gradient.
///
/// Rows are written bottom-up like a real read-back, so row 0 of the
/// returned buffer is the darkest (ground) row.
#[derive(Debug, Clone)]
pub struct HeadlessRenderer {
    sky: [u8; 3],
    ground: [u8; 3],
    frames_rendered: u64,
    last_camera: Option<CameraPose>,
}

impl Default for HeadlessRenderer {
    fn default() -> Self {
        Self {
            sky: [204, 189, 197],
            ground: [40, 40, 40],
            frames_rendered: 0,
            last_camera: None,
        }
    }
}

impl HeadlessRenderer {
    pub fn new(sky: [u8; 3], ground: [u8; 3]) -> Self {
        Self {
            sky,
            ground,
            ..Default::default()
        }
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    pub fn last_camera(&self) -> Option<&CameraPose> {
        self.last_camera.as_ref()
    }

    fn shade(&self, row_from_bottom: u32, height: u32) -> [u8; 4] {
        let t = if height > 1 {
            row_from_bottom as f32 / (height - 1) as f32
        } else {
            0.0
        };
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        [
            mix(self.ground[0], self.sky[0]),
            mix(self.ground[1], self.sky[1]),
            mix(self.ground[2], self.sky[2]),
            255,
        ]
    }
}

impl SceneRenderer for HeadlessRenderer {
    fn render(&mut self, camera: &CameraPose, _target: RenderTarget<'_>) -> Result<(), RenderError> {
        self.frames_rendered += 1;
        self.last_camera = Some(*camera);
        Ok(())
    }

    fn read_pixels(&mut self, target: &OffscreenTarget) -> Result<Vec<u8>, RenderError> {
        if target.width == 0 || target.height == 0 {
            return Err(RenderError::TargetUnavailable {
                width: target.width,
                height: target.height,
            });
        }
        let mut pixels = Vec::with_capacity(target.buffer_len());
        for row in 0..target.height {
            let px = self.shade(row, target.height);
            for _ in 0..target.width {
                pixels.extend_from_slice(&px);
            }
        }
        Ok(pixels)
    }
}
