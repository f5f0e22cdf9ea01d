//! Start/stop controller with a fixed-interval tick accumulator

use crate::events::EventQueue;
use crate::rng::Randomness;
use crate::sim::SnowSimulation;
use flurry_core::Viewport;
use std::time::Duration;

/// Whether ticks are currently armed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Stopped,
    Running,
}

/// Schedules whole simulation ticks at a fixed interval.
///
/// The host calls [`update`](SnowController::update) once per frame
/// with the elapsed wall time; the controller accumulates it and fires
/// zero or more ticks. `start`/`stop` are idempotent, the initial
/// state is `Stopped`, and stopping never clears simulation state —
/// the snow just freezes where it is.
pub struct SnowController {
    state: RunState,
    tick_interval: f64,
    accumulator: f64,
}

impl SnowController {
    pub fn new(tick_interval: Duration) -> Self {
        Self {
            state: RunState::Stopped,
            tick_interval: tick_interval.as_secs_f64(),
            accumulator: 0.0,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Arm the tick. Calling while already running changes nothing —
    /// in particular it does not reset the interval phase, so ticks
    /// cannot double-fire.
    pub fn start(&mut self) {
        if self.state == RunState::Stopped {
            self.state = RunState::Running;
            self.accumulator = 0.0;
        }
    }

    /// Disarm the tick. Idempotent. The accumulator is dropped so a
    /// later start does not burst stale ticks.
    pub fn stop(&mut self) {
        if self.state == RunState::Running {
            self.state = RunState::Stopped;
            self.accumulator = 0.0;
        }
    }

    /// Feed elapsed wall time and run every tick that is due.
    /// Returns the number of ticks fired.
    pub fn update<R: Randomness>(
        &mut self,
        dt: f64,
        sim: &mut SnowSimulation,
        viewport: Viewport,
        rng: &mut R,
        events: &mut EventQueue,
    ) -> u32 {
        if self.state != RunState::Running {
            return 0;
        }

        // Clamp to avoid a tick avalanche after a long stall
        self.accumulator += dt.min(0.25);

        let mut ticks = 0;
        while self.accumulator >= self.tick_interval {
            self.accumulator -= self.tick_interval;
            sim.tick(viewport, rng, events);
            ticks += 1;
        }
        ticks
    }
}
