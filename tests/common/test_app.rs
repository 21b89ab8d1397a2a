use bevy::prelude::*;
use drone_flight::{
    components::{BoundingBox, ControlKey},
    resources::FlightConfig,
    utils::REFERENCE_DT,
    FlightSim, FlightSimBuilder,
};

use crate::common::{create_inline_config, ScriptedRenderer};

// Builder for creating a test session with customizable configuration
pub struct TestAppBuilder {
    config: FlightConfig,
    renderer: Option<ScriptedRenderer>,
    obstacles: Vec<BoundingBox>,
    time_step: f64,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            config: create_inline_config(),
            renderer: None,
            obstacles: Vec::new(),
            time_step: REFERENCE_DT,
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: FlightConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_renderer(mut self, renderer: ScriptedRenderer) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn with_obstacle(mut self, bounds: BoundingBox) -> Self {
        self.obstacles.push(bounds);
        self
    }

    pub fn with_time_step(mut self, dt: f64) -> Self {
        self.time_step = dt;
        self
    }

    pub fn build(self) -> TestApp {
        let mut builder = FlightSimBuilder::new().with_config(self.config);
        if let Some(renderer) = self.renderer {
            builder = builder.with_renderer(renderer);
        }
        for bounds in self.obstacles {
            builder = builder.with_obstacle(bounds);
        }

        TestApp {
            sim: builder.build().expect("test config should be valid"),
            time_step: self.time_step,
        }
    }
}

/// Main test session wrapper
pub struct TestApp {
    pub sim: FlightSim,
    pub time_step: f64,
}

impl TestApp {
    pub fn run_steps(&mut self, steps: usize) {
        self.sim.run(steps, self.time_step);
    }

    pub fn run_frame(&mut self) {
        self.sim.tick(self.time_step);
    }

    pub fn press(&mut self, key: ControlKey) {
        self.sim.set_key(key, true);
    }

    pub fn release(&mut self, key: ControlKey) {
        self.sim.set_key(key, false);
    }

    pub fn get_state<T: Resource>(&self) -> Option<&T> {
        self.sim.app().world().get_resource::<T>()
    }

    pub fn query_all<T: Component>(&mut self) -> Vec<(Entity, &T)> {
        let world = self.sim.app_mut().world_mut();
        let mut query = world.query::<(Entity, &T)>();
        query.iter(world).collect()
    }
}
