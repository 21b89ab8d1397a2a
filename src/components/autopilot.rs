use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::Orientation;
use crate::resources::AutopilotConfig;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AutopilotPhase {
    #[default]
    Idle,
    Turning,
    Advancing,
}

/// Which way the vehicle travels once the turn is done.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TravelDirection {
    /// Along body forward (-Z), pitch held at `+forward_bias`
    #[default]
    Nose,
    /// Along the capture camera's view (+Z), pitch held at `-forward_bias`
    Camera,
}

impl TravelDirection {
    pub fn pitch_sign(self) -> f64 {
        match self {
            TravelDirection::Nose => 1.0,
            TravelDirection::Camera => -1.0,
        }
    }
}

/// Turn by a heading delta, then travel a distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AutopilotGoal {
    /// Heading error still to be turned through [rad]
    pub target_yaw_delta: f64,
    pub remaining_distance: f64,
    pub turning_phase_done: bool,
    pub direction: TravelDirection,
}

impl AutopilotGoal {
    /// Build a goal. A non-finite heading or a negative or NaN distance
    /// makes the whole goal the degenerate no-op goal.
    pub fn sanitized(heading_delta: f64, distance: f64) -> Self {
        let valid = heading_delta.is_finite() && distance >= 0.0;
        let (target_yaw_delta, remaining_distance) = if valid {
            (heading_delta, distance)
        } else {
            (0.0, 0.0)
        };
        Self {
            target_yaw_delta,
            remaining_distance,
            turning_phase_done: target_yaw_delta == 0.0,
            direction: TravelDirection::Nose,
        }
    }

    pub fn with_direction(mut self, direction: TravelDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn is_degenerate(&self) -> bool {
        self.target_yaw_delta == 0.0 && self.remaining_distance <= 0.0
    }
}

/// Requests from outside the tick; applied at the start of the next
/// autopilot step, in order.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum AutopilotCommand {
    Issue {
        heading_delta: f64,
        distance: f64,
        direction: TravelDirection,
    },
    Abort,
}

impl AutopilotCommand {
    /// Goal travelling toward the nose.
    pub fn issue(heading_delta: f64, distance: f64) -> Self {
        AutopilotCommand::Issue {
            heading_delta,
            distance,
            direction: TravelDirection::Nose,
        }
    }
}

/// Goal-seeking state machine. Owns the active goal exclusively.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct Autopilot {
    phase: AutopilotPhase,
    goal: Option<AutopilotGoal>,
}

impl Autopilot {
    pub fn phase(&self) -> AutopilotPhase {
        self.phase
    }

    pub fn goal(&self) -> Option<&AutopilotGoal> {
        self.goal.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.phase != AutopilotPhase::Idle
    }

    /// While active the autopilot is the only source of yaw and pitch.
    pub fn owns_attitude(&self) -> bool {
        self.is_active()
    }

    /// Replace any current goal.
    pub fn issue(&mut self, heading_delta: f64, distance: f64) -> AutopilotPhase {
        self.issue_toward(heading_delta, distance, TravelDirection::Nose)
    }

    pub fn issue_toward(
        &mut self,
        heading_delta: f64,
        distance: f64,
        direction: TravelDirection,
    ) -> AutopilotPhase {
        let goal = AutopilotGoal::sanitized(heading_delta, distance).with_direction(direction);
        if goal.target_yaw_delta != heading_delta || goal.remaining_distance != distance {
            debug!(
                "Autopilot goal clamped: heading {} -> {}, distance {} -> {}",
                heading_delta, goal.target_yaw_delta, distance, goal.remaining_distance
            );
        }

        if goal.is_degenerate() {
            self.goal = None;
            self.phase = AutopilotPhase::Idle;
        } else if goal.target_yaw_delta != 0.0 {
            self.goal = Some(goal);
            self.phase = AutopilotPhase::Turning;
        } else {
            self.goal = Some(goal);
            self.phase = AutopilotPhase::Advancing;
        }
        info!("Autopilot goal issued, phase {:?}", self.phase);
        self.phase
    }

    pub fn abort(&mut self) {
        if self.is_active() {
            info!("Autopilot goal aborted in phase {:?}", self.phase);
        }
        self.goal = None;
        self.phase = AutopilotPhase::Idle;
    }

    pub fn apply(&mut self, command: AutopilotCommand) {
        match command {
            AutopilotCommand::Issue {
                heading_delta,
                distance,
                direction,
            } => {
                self.issue_toward(heading_delta, distance, direction);
            }
            AutopilotCommand::Abort => self.abort(),
        }
    }

    /// Advance the machine one tick, writing yaw/pitch while a goal is live.
    pub fn step(&mut self, orientation: &mut Orientation, config: &AutopilotConfig) {
        let Some(goal) = self.goal.as_mut() else {
            self.phase = AutopilotPhase::Idle;
            return;
        };

        match self.phase {
            AutopilotPhase::Idle => {
                self.goal = None;
            }
            AutopilotPhase::Turning => {
                let remaining = goal.target_yaw_delta;
                if remaining.abs() < config.heading_tolerance {
                    orientation.yaw += remaining;
                    goal.target_yaw_delta = 0.0;
                    goal.turning_phase_done = true;
                    self.phase = AutopilotPhase::Advancing;
                    info!("Autopilot turn complete, advancing");
                } else {
                    let step = remaining.signum() * remaining.abs().min(config.turn_step);
                    orientation.yaw += step;
                    goal.target_yaw_delta -= step;
                }
                orientation.pitch = 0.0;
            }
            AutopilotPhase::Advancing => {
                goal.remaining_distance = (goal.remaining_distance - config.distance_step).max(0.0);
                if goal.remaining_distance <= 0.0 {
                    self.goal = None;
                    self.phase = AutopilotPhase::Idle;
                    info!("Autopilot goal complete");
                } else {
                    orientation.pitch = goal.direction.pitch_sign() * config.forward_bias;
                }
            }
        }
    }
}

/// Detection box from the vision client: `[ymin, xmin, ymax, xmax]` in
/// thousandths of the image size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetBox {
    pub ymin: f64,
    pub xmin: f64,
    pub ymax: f64,
    pub xmax: f64,
}

impl TargetBox {
    pub fn from_array(bbox: [f64; 4]) -> Self {
        Self {
            ymin: bbox[0],
            xmin: bbox[1],
            ymax: bbox[2],
            xmax: bbox[3],
        }
    }

    /// Box centre as `(x, y)` fractions of the image.
    pub fn center(&self) -> (f64, f64) {
        let x = (self.xmin + self.xmax) / 2.0 / 1000.0;
        let y = (self.ymin + self.ymax) / 2.0 / 1000.0;
        (x, y)
    }

    /// Heading change that centres the box, positive to the left.
    pub fn heading_delta(&self, horizontal_fov: f64) -> f64 {
        let (x, _) = self.center();
        (0.5 - x.clamp(0.0, 1.0)) * horizontal_fov
    }
}

/// Reply from the vision client; an empty box list means nothing found.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectionResponse {
    #[serde(default)]
    pub bounding_box: Vec<f64>,
}

impl DetectionResponse {
    pub fn target(&self) -> Option<TargetBox> {
        match self.bounding_box.as_slice() {
            [ymin, xmin, ymax, xmax] => Some(TargetBox::from_array([*ymin, *xmin, *ymax, *xmax])),
            _ => None,
        }
    }
}
