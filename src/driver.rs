//! Fixed timestep driver
//!
//! Hosts with a variable frame clock (requestAnimationFrame, vsync) hand the
//! elapsed wall time to `advance`, which runs as many whole simulation ticks
//! as fit. Leftover time carries over to the next frame.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::session::GameSession;
use crate::sim::TickOutcome;

/// Longest frame gap honoured; anything longer is treated as a stall
const MAX_FRAME_DT: f32 = 0.1;

/// Accumulates wall time and converts it into simulation ticks
#[derive(Debug, Clone)]
pub struct FixedStepDriver {
    step: f32,
    max_substeps: u32,
    accumulator: f32,
}

impl Default for FixedStepDriver {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS)
    }
}

impl FixedStepDriver {
    pub fn new(step: f32, max_substeps: u32) -> Self {
        Self {
            step,
            max_substeps: max_substeps.max(1),
            accumulator: 0.0,
        }
    }

    /// Run the ticks owed for `dt` seconds of wall time
    ///
    /// Returns the number of ticks run. Stops early once the game is won.
    pub fn advance(&mut self, session: &mut GameSession, dt: f32) -> u32 {
        let dt = if dt.is_finite() { dt.clamp(0.0, MAX_FRAME_DT) } else { 0.0 };
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= self.step && substeps < self.max_substeps {
            self.accumulator -= self.step;
            substeps += 1;
            if session.tick() == TickOutcome::Won {
                self.accumulator = 0.0;
                break;
            }
        }

        // Drop time we could not catch up on rather than bank it
        if substeps == self.max_substeps {
            self.accumulator = self.accumulator.min(self.step);
        }

        substeps
    }

    /// Fraction of a step left over, for render interpolation
    pub fn alpha(&self) -> f32 {
        (self.accumulator / self.step).clamp(0.0, 1.0)
    }

    pub fn clear(&mut self) {
        self.accumulator = 0.0;
    }
}
