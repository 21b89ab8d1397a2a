use bevy::prelude::*;
use std::path::Path;
use std::time::{Duration, Instant};

use crate::components::{
    Autopilot, AutopilotCommand, BoundingBox, CameraRig, CameraSelection, CameraToggle,
    CameraView, CapturePipeline, CaptureSlot, CaptureStats, CapturedFrame, CollisionEvent,
    ControlInputEvent, ControlKey, DetectionResponse, Obstacle, ToggleCameraView, TravelDirection,
    VehicleState, VehicleTelemetry,
};
use crate::plugins::{FlightPlugin, StartupStage};
use crate::rendering::{SceneBackend, SceneRenderer};
use crate::resources::{FlightConfig, SimClock, UpdateMode};
use crate::systems::record_outcome;
use crate::utils::SimError;

/// Assembles a stepped, window-less flight session.
#[derive(Default)]
pub struct FlightSimBuilder {
    config: FlightConfig,
    backend: Option<SceneBackend>,
    obstacles: Vec<BoundingBox>,
    logging: bool,
}

impl FlightSimBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: FlightConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_config_file(mut self, path: impl AsRef<Path>) -> Result<Self, SimError> {
        self.config = FlightConfig::from_file(path)?;
        Ok(self)
    }

    /// Replace the built-in `HeadlessRenderer`.
    pub fn with_renderer(mut self, renderer: impl SceneRenderer) -> Self {
        self.backend = Some(SceneBackend::new(renderer));
        self
    }

    pub fn with_obstacle(mut self, bounds: BoundingBox) -> Self {
        self.obstacles.push(bounds);
        self
    }

    /// Install Bevy's `LogPlugin`; honours `RUST_LOG`.
    pub fn with_logging(mut self) -> Self {
        self.logging = true;
        self
    }

    pub fn build(self) -> Result<FlightSim, SimError> {
        self.config.validate()?;

        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        if self.logging {
            app.add_plugins(bevy::log::LogPlugin::default());
        }
        if let Some(backend) = self.backend {
            app.insert_resource(backend);
        }
        app.add_plugins(FlightPlugin::new(self.config, UpdateMode::Stepped));

        let obstacles = self.obstacles;
        app.add_systems(
            Startup,
            (move |mut commands: Commands| {
                for bounds in &obstacles {
                    commands.spawn((Obstacle(*bounds), Name::new("Obstacle")));
                }
            })
            .in_set(StartupStage::BuildScene),
        );

        app.finish();
        app.cleanup();
        Ok(FlightSim { app })
    }
}

/// Driver-facing handle on the flight core.
///
/// Inputs and goal commands are queued and take effect on the next `tick`.
pub struct FlightSim {
    app: App,
}

impl FlightSim {
    pub fn builder() -> FlightSimBuilder {
        FlightSimBuilder::new()
    }

    pub fn new(config: FlightConfig) -> Result<Self, SimError> {
        FlightSimBuilder::new().with_config(config).build()
    }

    /// Advance the simulation by `dt` seconds.
    pub fn tick(&mut self, dt: f64) {
        self.app.world_mut().resource_mut::<SimClock>().advance(dt);
        self.app.update();
    }

    pub fn run(&mut self, ticks: usize, dt: f64) {
        for _ in 0..ticks {
            self.tick(dt);
        }
    }

    /// Press or release a control by identifier. Unknown identifiers are
    /// ignored and reported as `false`.
    pub fn set_control_input(&mut self, id: &str, pressed: bool) -> bool {
        match id.parse::<ControlKey>() {
            Ok(key) => {
                self.set_key(key, pressed);
                true
            }
            Err(err) => {
                debug!("Ignoring input: {}", err);
                false
            }
        }
    }

    pub fn set_key(&mut self, key: ControlKey, pressed: bool) {
        self.app
            .world_mut()
            .send_event(ControlInputEvent { key, pressed });
    }

    pub fn issue_autopilot_goal(&mut self, heading_delta: f64, distance: f64) {
        self.app
            .world_mut()
            .send_event(AutopilotCommand::issue(heading_delta, distance));
    }

    pub fn abort_autopilot_goal(&mut self) {
        self.app.world_mut().send_event(AutopilotCommand::Abort);
    }

    /// Turn until a detection reported by the vision client is centred in
    /// the capture view, then fly `distance` toward it. Returns whether the
    /// response contained a target.
    pub fn issue_goal_from_detection(
        &mut self,
        response_json: &str,
        distance: f64,
    ) -> Result<bool, SimError> {
        let response: DetectionResponse = serde_json::from_str(response_json)?;
        let Some(target) = response.target() else {
            info!("No target in detection response");
            return Ok(false);
        };

        let heading_delta = target.heading_delta(self.config().capture.horizontal_fov());
        info!(
            "Target at {:?}, turning {:.3} rad",
            target.center(),
            heading_delta
        );
        self.app.world_mut().send_event(AutopilotCommand::Issue {
            heading_delta,
            distance,
            direction: TravelDirection::Camera,
        });
        Ok(true)
    }

    pub fn toggle_camera_view(&mut self, toggle: CameraToggle) {
        self.app.world_mut().send_event(ToggleCameraView(toggle));
    }

    pub fn add_obstacle(&mut self, bounds: BoundingBox) -> Entity {
        self.app
            .world_mut()
            .spawn((Obstacle(bounds), Name::new("Obstacle")))
            .id()
    }

    pub fn telemetry(&self) -> VehicleTelemetry {
        self.app.world().resource::<VehicleTelemetry>().clone()
    }

    pub fn vehicle(&self) -> &VehicleState {
        self.app.world().resource::<VehicleState>()
    }

    pub fn autopilot(&self) -> &Autopilot {
        self.app.world().resource::<Autopilot>()
    }

    pub fn camera_rig(&self) -> &CameraRig {
        self.app.world().resource::<CameraRig>()
    }

    pub fn camera_selection(&self) -> CameraSelection {
        *self.app.world().resource::<CameraSelection>()
    }

    pub fn active_camera(&self) -> CameraView {
        self.camera_selection().active()
    }

    pub fn config(&self) -> &FlightConfig {
        self.app.world().resource::<FlightConfig>()
    }

    pub fn clock(&self) -> &SimClock {
        self.app.world().resource::<SimClock>()
    }

    pub fn latest_captured_frame(&self) -> Option<&CapturedFrame> {
        self.app.world().resource::<CaptureSlot>().latest()
    }

    pub fn capture_stats(&self) -> CaptureStats {
        *self.app.world().resource::<CaptureStats>()
    }

    /// Collision events raised since the last call.
    pub fn drain_collision_events(&mut self) -> Vec<CollisionEvent> {
        self.app
            .world_mut()
            .resource_mut::<Events<CollisionEvent>>()
            .drain()
            .collect()
    }

    /// Block until every dispatched capture has landed or `timeout` passes.
    ///
    /// Not for use inside the tick loop; it exists for drivers and tests
    /// running background encoding.
    pub fn wait_for_capture(&mut self, timeout: Duration) -> Option<&CapturedFrame> {
        let deadline = Instant::now() + timeout;
        let receiver = self
            .app
            .world()
            .resource::<CapturePipeline>()
            .receiver()
            .clone();

        while self.capture_stats().in_flight() > 0 {
            let remaining = deadline.saturating_duration_since(Instant::now());
            let Ok(outcome) = receiver.recv_timeout(remaining) else {
                warn!(
                    "Timed out with {} capture(s) in flight",
                    self.capture_stats().in_flight()
                );
                break;
            };
            self.app
                .world_mut()
                .resource_scope(|world, mut slot: Mut<CaptureSlot>| {
                    let mut stats = world.resource_mut::<CaptureStats>();
                    record_outcome(outcome, &mut slot, &mut stats);
                });
        }

        self.latest_captured_frame()
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}
