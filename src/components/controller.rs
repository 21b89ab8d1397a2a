use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::f64::consts::PI;
use std::str::FromStr;
use thiserror::Error;

/// Continuous control channel a key feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlAxis {
    /// Thrust along vehicle-forward; becomes pitch
    Forward,
    /// Heading rate
    Yaw,
    /// Lateral tilt
    Roll,
    /// Rate of change of the desired altitude
    Altitude,
}

/// What holding a key does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyBinding {
    Axis(ControlAxis, f64),
    PitchFlip(f64),
    RollFlip(f64),
}

/// Every input identifier the vehicle understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ControlKey {
    W,
    S,
    A,
    D,
    I,
    K,
    J,
    L,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}

impl ControlKey {
    pub const ALL: [ControlKey; 12] = [
        ControlKey::W,
        ControlKey::S,
        ControlKey::A,
        ControlKey::D,
        ControlKey::I,
        ControlKey::K,
        ControlKey::J,
        ControlKey::L,
        ControlKey::ArrowUp,
        ControlKey::ArrowDown,
        ControlKey::ArrowLeft,
        ControlKey::ArrowRight,
    ];

    pub fn binding(self) -> KeyBinding {
        match self {
            ControlKey::W => KeyBinding::Axis(ControlAxis::Forward, -0.05),
            ControlKey::S => KeyBinding::Axis(ControlAxis::Forward, 0.05),
            ControlKey::A => KeyBinding::Axis(ControlAxis::Yaw, 0.05),
            ControlKey::D => KeyBinding::Axis(ControlAxis::Yaw, -0.05),
            ControlKey::I => KeyBinding::Axis(ControlAxis::Altitude, 5.0),
            ControlKey::K => KeyBinding::Axis(ControlAxis::Altitude, -5.0),
            ControlKey::J => KeyBinding::Axis(ControlAxis::Roll, -0.1),
            ControlKey::L => KeyBinding::Axis(ControlAxis::Roll, 0.1),
            ControlKey::ArrowUp => KeyBinding::PitchFlip(PI),
            ControlKey::ArrowDown => KeyBinding::PitchFlip(-PI),
            ControlKey::ArrowLeft => KeyBinding::RollFlip(PI),
            ControlKey::ArrowRight => KeyBinding::RollFlip(-PI),
        }
    }

    /// Parse an identifier such as `"w"` or `"ArrowUp"`, ignoring case.
    pub fn from_id(id: &str) -> Option<Self> {
        let key = match id.trim().to_ascii_lowercase().as_str() {
            "w" => ControlKey::W,
            "s" => ControlKey::S,
            "a" => ControlKey::A,
            "d" => ControlKey::D,
            "i" => ControlKey::I,
            "k" => ControlKey::K,
            "j" => ControlKey::J,
            "l" => ControlKey::L,
            "arrowup" => ControlKey::ArrowUp,
            "arrowdown" => ControlKey::ArrowDown,
            "arrowleft" => ControlKey::ArrowLeft,
            "arrowright" => ControlKey::ArrowRight,
            _ => return None,
        };
        Some(key)
    }

    pub fn key_code(self) -> KeyCode {
        match self {
            ControlKey::W => KeyCode::KeyW,
            ControlKey::S => KeyCode::KeyS,
            ControlKey::A => KeyCode::KeyA,
            ControlKey::D => KeyCode::KeyD,
            ControlKey::I => KeyCode::KeyI,
            ControlKey::K => KeyCode::KeyK,
            ControlKey::J => KeyCode::KeyJ,
            ControlKey::L => KeyCode::KeyL,
            ControlKey::ArrowUp => KeyCode::ArrowUp,
            ControlKey::ArrowDown => KeyCode::ArrowDown,
            ControlKey::ArrowLeft => KeyCode::ArrowLeft,
            ControlKey::ArrowRight => KeyCode::ArrowRight,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown control identifier '{0}'")]
pub struct UnknownControl(pub String);

impl FromStr for ControlKey {
    type Err = UnknownControl;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ControlKey::from_id(s).ok_or_else(|| UnknownControl(s.to_string()))
    }
}

/// A key going down or up, queued for the next tick.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ControlInputEvent {
    pub key: ControlKey,
    pub pressed: bool,
}

/// Keys currently held down.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct HeldInputs {
    keys: BTreeSet<ControlKey>,
}

impl HeldInputs {
    pub fn press(&mut self, key: ControlKey) {
        self.keys.insert(key);
    }

    pub fn release(&mut self, key: ControlKey) {
        self.keys.remove(&key);
    }

    pub fn set(&mut self, key: ControlKey, pressed: bool) {
        if pressed {
            self.press(key);
        } else {
            self.release(key);
        }
    }

    pub fn is_held(&self, key: ControlKey) -> bool {
        self.keys.contains(&key)
    }

    pub fn iter(&self) -> impl Iterator<Item = ControlKey> + '_ {
        self.keys.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }
}

/// Per-tick control values, summed over the held keys.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlAxes {
    pub forward: f64,
    pub yaw: f64,
    pub roll: f64,
    pub altitude: f64,
    /// Momentary pitch override from the flip keys
    pub pitch_flip: f64,
    /// Momentary roll override from the flip keys
    pub roll_flip: f64,
}

impl ControlAxes {
    pub fn from_held(held: &HeldInputs) -> Self {
        let mut axes = Self::default();
        for key in held.iter() {
            axes.apply(key.binding());
        }
        axes
    }

    fn apply(&mut self, binding: KeyBinding) {
        match binding {
            KeyBinding::Axis(ControlAxis::Forward, v) => self.forward += v,
            KeyBinding::Axis(ControlAxis::Yaw, v) => self.yaw += v,
            KeyBinding::Axis(ControlAxis::Roll, v) => self.roll += v,
            KeyBinding::Axis(ControlAxis::Altitude, v) => self.altitude += v,
            KeyBinding::PitchFlip(v) => self.pitch_flip += v,
            KeyBinding::RollFlip(v) => self.roll_flip += v,
        }
    }

    pub fn axis(&self, axis: ControlAxis) -> f64 {
        match axis {
            ControlAxis::Forward => self.forward,
            ControlAxis::Yaw => self.yaw,
            ControlAxis::Roll => self.roll,
            ControlAxis::Altitude => self.altitude,
        }
    }
}
