use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Position and orientation of a camera; local -Z is the view direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: Vector3<f64>,
    pub rotation: UnitQuaternion<f64>,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            rotation: UnitQuaternion::identity(),
        }
    }
}

impl CameraPose {
    pub fn new(position: Vector3<f64>, rotation: UnitQuaternion<f64>) -> Self {
        Self { position, rotation }
    }

    pub fn view_direction(&self) -> Vector3<f64> {
        self.rotation * Vector3::new(0.0, 0.0, -1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CameraView {
    /// Orbiting spectator at a pinned distance
    Chase,
    /// Nose camera facing back along the hull
    FirstPersonReversed,
    /// Belly camera
    Ventral,
}

impl CameraView {
    pub const ALL: [CameraView; 3] = [
        CameraView::Chase,
        CameraView::FirstPersonReversed,
        CameraView::Ventral,
    ];
}

/// The three derived camera poses, rebuilt every tick.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct CameraRig {
    pub chase: CameraPose,
    pub first_person_reversed: CameraPose,
    pub ventral: CameraPose,
}

impl CameraRig {
    pub fn pose(&self, view: CameraView) -> &CameraPose {
        match view {
            CameraView::Chase => &self.chase,
            CameraView::FirstPersonReversed => &self.first_person_reversed,
            CameraView::Ventral => &self.ventral,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CameraToggle {
    FirstPerson,
    Ventral,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown camera view '{0}'")]
pub struct UnknownCameraToggle(pub String);

impl FromStr for CameraToggle {
    type Err = UnknownCameraToggle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "firstPerson" | "first_person" => Ok(CameraToggle::FirstPerson),
            "ventral" => Ok(CameraToggle::Ventral),
            other => Err(UnknownCameraToggle(other.to_string())),
        }
    }
}

/// Which rig view is on screen. At most one flag is ever set.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CameraSelection {
    pub first_person: bool,
    pub ventral: bool,
}

impl CameraSelection {
    pub fn toggle(&mut self, toggle: CameraToggle) {
        match toggle {
            CameraToggle::FirstPerson => {
                self.first_person = !self.first_person;
                self.ventral = false;
            }
            CameraToggle::Ventral => {
                self.ventral = !self.ventral;
                self.first_person = false;
            }
        }
    }

    pub fn active(&self) -> CameraView {
        if self.first_person {
            CameraView::FirstPersonReversed
        } else if self.ventral {
            CameraView::Ventral
        } else {
            CameraView::Chase
        }
    }
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleCameraView(pub CameraToggle);

/// Marks an ECS camera entity driven by one rig view.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RigCamera(pub CameraView);
