use bevy::prelude::*;
use thiserror::Error;

use crate::components::CameraPose;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("Render backend failed: {0}")]
    Backend(String),
    #[error("Off-screen target {width}x{height} is not available")]
    TargetUnavailable { width: u32, height: u32 },
    #[error("Pixel read-back failed: {0}")]
    Readback(String),
}

/// Fixed-size RGBA8 buffer the capture camera renders into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffscreenTarget {
    pub width: u32,
    pub height: u32,
}

impl OffscreenTarget {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn row_bytes(&self) -> usize {
        self.width as usize * 4
    }

    pub fn buffer_len(&self) -> usize {
        self.row_bytes() * self.height as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderTarget<'a> {
    /// The on-screen viewport
    Viewport,
    Offscreen(&'a OffscreenTarget),
}

/// The rendering collaborator the flight core drives once per tick.
///
/// Scene construction, assets and shading all live behind this trait; the
/// core only asks for frames from a given camera pose and reads pixels back.
pub trait SceneRenderer: Send + Sync + 'static {
    /// Draw the scene from `camera` into `target`.
    fn render(&mut self, camera: &CameraPose, target: RenderTarget<'_>) -> Result<(), RenderError>;

    /// Read back the last frame drawn into `target`, as bottom-up RGBA8 rows.
    fn read_pixels(&mut self, target: &OffscreenTarget) -> Result<Vec<u8>, RenderError>;
}

#[derive(Resource, Deref, DerefMut)]
pub struct SceneBackend(pub Box<dyn SceneRenderer>);

impl SceneBackend {
    pub fn new(renderer: impl SceneRenderer) -> Self {
        Self(Box::new(renderer))
    }
}
