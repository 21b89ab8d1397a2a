use bevy::prelude::*;

use crate::components::{CaptureOutcome, CapturePipeline, CaptureSlot, CaptureStats};

/// Store a finished encode, keeping only the newest sequence.
pub fn record_outcome(outcome: CaptureOutcome, slot: &mut CaptureSlot, stats: &mut CaptureStats) {
    match outcome {
        CaptureOutcome::Encoded(frame) => {
            let sequence = frame.sequence;
            if slot.offer(frame) {
                stats.completed += 1;
            } else {
                debug!(
                    "Stale frame {} dropped, slot holds {:?}",
                    sequence,
                    slot.latest_sequence()
                );
                stats.dropped_stale += 1;
            }
        }
        CaptureOutcome::Failed { sequence, error } => {
            warn!("Capture {} failed: {}", sequence, error);
            stats.failed += 1;
        }
    }
}

/// Drains finished encodes without blocking.
pub fn capture_collect_system(
    pipeline: Res<CapturePipeline>,
    mut slot: ResMut<CaptureSlot>,
    mut stats: ResMut<CaptureStats>,
) {
    for outcome in pipeline.drain() {
        record_outcome(outcome, &mut slot, &mut stats);
    }
}
