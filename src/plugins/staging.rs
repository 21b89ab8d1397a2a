use bevy::prelude::*;

/// Ordering of the one-off setup work run in `Startup`.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum StartupStage {
    BuildCameras,
    BuildScene,
}

pub struct StartupSequencePlugin;

impl Plugin for StartupSequencePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Startup,
            (StartupStage::BuildCameras, StartupStage::BuildScene).chain(),
        );
    }
}
