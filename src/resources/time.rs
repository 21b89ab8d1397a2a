use bevy::prelude::*;

use crate::utils::REFERENCE_DT;

/// How the tick's `dt` is sourced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateMode {
    /// The driver hands `dt` to every tick (`FlightSim::tick`)
    #[default]
    Stepped,
    /// `dt` follows Bevy's frame clock
    Realtime,
}

/// Simulation clock shared by every system of a tick.
#[derive(Resource, Debug, Clone)]
pub struct SimClock {
    dt: f64,
    elapsed: f64,
    tick_count: u64,
    time_scale: f64,
}

impl Default for SimClock {
    fn default() -> Self {
        Self {
            dt: REFERENCE_DT,
            elapsed: 0.0,
            tick_count: 0,
            time_scale: 1.0,
        }
    }
}

impl SimClock {
    /// Start a new tick lasting `dt` seconds (before scaling).
    pub fn advance(&mut self, dt: f64) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.dt = dt * self.time_scale;
        self.elapsed += self.dt;
        self.tick_count += 1;
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn set_time_scale(&mut self, scale: f64) {
        self.time_scale = scale.max(0.0);
    }
}

/// Copies Bevy's frame delta into the simulation clock.
pub fn realtime_clock_system(time: Res<Time>, mut clock: ResMut<SimClock>) {
    clock.advance(time.delta_secs_f64());
}
