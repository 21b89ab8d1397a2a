use drone_flight::{
    components::CameraPose,
    rendering::{OffscreenTarget, RenderError, RenderTarget, SceneRenderer},
};
use std::sync::{Arc, Mutex};

/// What the scripted renderer should do next, shared with the test.
#[derive(Debug, Default)]
pub struct RenderScript {
    /// Off-screen renders left to fail
    pub fail_renders: u32,
    /// Read-backs left to return a truncated buffer
    pub short_readbacks: u32,
    pub offscreen_cameras: Vec<CameraPose>,
    pub viewport_cameras: Vec<CameraPose>,
}

/// Renderer whose read-back is red in the bottom half and blue in the top
/// half (bottom-up rows), with failures injected through `RenderScript`.
#[derive(Clone, Default)]
pub struct ScriptedRenderer {
    script: Arc<Mutex<RenderScript>>,
}

pub const BOTTOM_COLOR: [u8; 4] = [220, 20, 20, 255];
pub const TOP_COLOR: [u8; 4] = [20, 20, 220, 255];

impl ScriptedRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn script(&self) -> Arc<Mutex<RenderScript>> {
        self.script.clone()
    }
}

impl SceneRenderer for ScriptedRenderer {
    fn render(&mut self, camera: &CameraPose, target: RenderTarget<'_>) -> Result<(), RenderError> {
        let mut script = self.script.lock().unwrap();
        match target {
            RenderTarget::Viewport => {
                script.viewport_cameras.push(*camera);
                Ok(())
            }
            RenderTarget::Offscreen(_) => {
                if script.fail_renders > 0 {
                    script.fail_renders -= 1;
                    return Err(RenderError::Backend("scripted failure".into()));
                }
                script.offscreen_cameras.push(*camera);
                Ok(())
            }
        }
    }

    fn read_pixels(&mut self, target: &OffscreenTarget) -> Result<Vec<u8>, RenderError> {
        let mut script = self.script.lock().unwrap();
        let mut pixels = Vec::with_capacity(target.buffer_len());
        for row in 0..target.height {
            let color = if row < target.height / 2 {
                BOTTOM_COLOR
            } else {
                TOP_COLOR
            };
            for _ in 0..target.width {
                pixels.extend_from_slice(&color);
            }
        }
        if script.short_readbacks > 0 {
            script.short_readbacks -= 1;
            pixels.truncate(pixels.len() / 2);
        }
        Ok(pixels)
    }
}
