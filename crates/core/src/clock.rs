//! Fixed-timestep scheduler.
//!
//! Wall-clock time is accumulated and drained in whole simulation steps; the
//! remainder carries over to the next frame. Long stalls are capped so a
//! suspended terminal does not trigger a burst of catch-up steps.

use std::time::Duration;

/// Largest elapsed time credited in a single `advance` call
pub const MAX_FRAME_TIME: Duration = Duration::from_millis(250);

#[derive(Debug, Clone)]
pub struct FixedTimestep {
    step: Duration,
    accumulator: Duration,
}

impl FixedTimestep {
    /// Scheduler stepping `fps` times per second (at least once)
    pub fn new(fps: u32) -> Self {
        let fps = fps.max(1);
        Self::from_step(Duration::from_nanos(1_000_000_000 / fps as u64))
    }

    pub fn from_step(step: Duration) -> Self {
        Self {
            step: step.max(Duration::from_nanos(1)),
            accumulator: Duration::ZERO,
        }
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    /// Time accumulated but not yet consumed by a step
    pub fn remainder(&self) -> Duration {
        self.accumulator
    }

    /// Credit `elapsed` and return how many whole steps are due
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed.min(MAX_FRAME_TIME);

        let mut steps = 0;
        while self.accumulator >= self.step {
            self.accumulator -= self.step;
            steps += 1;
        }
        steps
    }

    /// How long until the next step is due
    pub fn time_to_next_step(&self) -> Duration {
        self.step.saturating_sub(self.accumulator)
    }

    pub fn reset(&mut self) {
        self.accumulator = Duration::ZERO;
    }
}
