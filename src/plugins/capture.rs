use bevy::prelude::*;

use crate::components::{CapturePipeline, CaptureSlot, CaptureStats};
use crate::plugins::FlightSet;
use crate::rendering::{HeadlessRenderer, OffscreenTarget, SceneBackend};
use crate::resources::CaptureConfig;
use crate::systems::{capture_collect_system, capture_dispatch_system, primary_render_system};

/// Primary render plus the off-screen capture pipeline.
///
/// Falls back to `HeadlessRenderer` when no `SceneBackend` was inserted
/// before the plugin is built.
pub struct CapturePlugin {
    config: CaptureConfig,
}

impl CapturePlugin {
    pub fn new(config: CaptureConfig) -> Self {
        Self { config }
    }
}

impl Plugin for CapturePlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<SceneBackend>() {
            app.insert_resource(SceneBackend::new(HeadlessRenderer::default()));
        }

        app.insert_resource(CapturePipeline::new(OffscreenTarget::new(
            self.config.width,
            self.config.height,
        )))
        .init_resource::<CaptureSlot>()
        .init_resource::<CaptureStats>()
        .add_systems(
            Update,
            (
                primary_render_system,
                capture_dispatch_system,
                capture_collect_system,
            )
                .chain()
                .in_set(FlightSet::Capture),
        );

        info!(
            "Capture pipeline ready: {}x{} at quality {} ({:?})",
            self.config.width, self.config.height, self.config.quality, self.config.encode_mode
        );
    }
}
