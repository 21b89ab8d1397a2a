use bevy::prelude::*;
use bevy::tasks::{AsyncComputeTaskPool, TaskPool};
use chrono::Utc;
use crossbeam_channel::Sender;

use crate::components::{
    CameraPose, CameraRig, CameraSelection, CaptureError, CaptureOutcome, CapturePipeline,
    CaptureStats, RawFrame,
};
use crate::rendering::{OffscreenTarget, RenderTarget, SceneBackend, SceneRenderer};
use crate::resources::{EncodeMode, FlightConfig};

/// Asks the backend to draw the selected view to the viewport.
pub fn primary_render_system(
    rig: Res<CameraRig>,
    selection: Res<CameraSelection>,
    mut backend: ResMut<SceneBackend>,
) {
    let pose = rig.pose(selection.active());
    if let Err(err) = backend.render(pose, RenderTarget::Viewport) {
        warn!("Primary render failed: {}", err);
    }
}

/// Render the capture view off-screen and read it back upright.
pub fn read_frame(
    renderer: &mut dyn SceneRenderer,
    camera: &CameraPose,
    target: &OffscreenTarget,
    sequence: u64,
) -> Result<RawFrame, CaptureError> {
    renderer.render(camera, RenderTarget::Offscreen(target))?;
    let pixels = renderer.read_pixels(target)?;
    RawFrame::from_readback(sequence, target, pixels, Utc::now())
}

pub fn encode_outcome(raw: RawFrame, quality: u8) -> CaptureOutcome {
    let sequence = raw.sequence;
    match raw.encode(quality) {
        Ok(frame) => CaptureOutcome::Encoded(frame),
        Err(error) => CaptureOutcome::Failed { sequence, error },
    }
}

/// Send an inline encode result; a closed channel counts as a failure so the
/// frame does not stay in flight.
pub fn deliver_inline(
    sender: &Sender<CaptureOutcome>,
    outcome: CaptureOutcome,
    stats: &mut CaptureStats,
) -> bool {
    let sequence = outcome.sequence();
    if sender.send(outcome).is_err() {
        warn!("Capture {} lost: result channel closed", sequence);
        stats.failed += 1;
        return false;
    }
    true
}

/// Takes the next sequence number and hands the read-back to the encoder.
///
/// Read-back failures are counted here; encode results arrive through the
/// pipeline channel and are picked up by `capture_collect_system`.
pub fn capture_dispatch_system(
    config: Res<FlightConfig>,
    rig: Res<CameraRig>,
    mut pipeline: ResMut<CapturePipeline>,
    mut backend: ResMut<SceneBackend>,
    mut stats: ResMut<CaptureStats>,
) {
    let capture = &config.capture;
    if !capture.enabled || !pipeline.tick(capture.interval) {
        return;
    }

    let sequence = pipeline.next_sequence();
    stats.dispatched += 1;

    let target = pipeline.target;
    let raw = match read_frame(&mut *backend.0, &rig.first_person_reversed, &target, sequence) {
        Ok(raw) => raw,
        Err(err) => {
            warn!("Capture {} dropped: {}", sequence, err);
            stats.failed += 1;
            return;
        }
    };

    let sender = pipeline.sender();
    let quality = capture.quality;
    match capture.encode_mode {
        EncodeMode::Inline => {
            deliver_inline(&sender, encode_outcome(raw, quality), &mut stats);
        }
        EncodeMode::Background => {
            AsyncComputeTaskPool::get_or_init(TaskPool::new)
                .spawn(async move {
                    if sender.send(encode_outcome(raw, quality)).is_err() {
                        debug!("Capture {} finished after the pipeline closed", sequence);
                    }
                })
                .detach();
        }
    }
}
