use bevy::prelude::*;

use crate::components::{
    CameraToggle, ControlAxes, ControlInputEvent, ControlKey, HeldInputs, ToggleCameraView,
};

/// Maps the physical keyboard onto control keys and camera toggles.
///
/// Only installed in realtime mode; headless runs have no `ButtonInput`.
pub fn keyboard_input_system(
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    mut inputs: EventWriter<ControlInputEvent>,
    mut toggles: EventWriter<ToggleCameraView>,
) {
    let Some(keyboard) = keyboard else {
        return;
    };

    for key in ControlKey::ALL {
        let code = key.key_code();
        if keyboard.just_pressed(code) {
            inputs.send(ControlInputEvent { key, pressed: true });
        }
        if keyboard.just_released(code) {
            inputs.send(ControlInputEvent {
                key,
                pressed: false,
            });
        }
    }

    if keyboard.just_pressed(KeyCode::KeyC) {
        toggles.send(ToggleCameraView(CameraToggle::FirstPerson));
    }
    if keyboard.just_pressed(KeyCode::KeyM) {
        toggles.send(ToggleCameraView(CameraToggle::Ventral));
    }
}

/// Folds queued key transitions into the held set and recomputes the axes.
pub fn control_mapping_system(
    mut events: EventReader<ControlInputEvent>,
    mut held: ResMut<HeldInputs>,
    mut axes: ResMut<ControlAxes>,
) {
    for event in events.read() {
        held.set(event.key, event.pressed);
    }
    *axes = ControlAxes::from_held(&held);
}
