//! Fixed-rate tick scheduling
//!
//! Real frame time is fed in, whole simulation ticks come out. Leftover time
//! carries over to the next frame so the simulation runs at the configured
//! rate regardless of the display refresh rate.

use crate::Params;

#[derive(Debug, Clone)]
pub struct FixedClock {
    step: f64,
    accumulator: f64,
    ticks: u64,
}

impl FixedClock {
    pub fn new(tick_rate_hz: u32) -> Self {
        Self {
            step: 1.0 / tick_rate_hz.max(1) as f64,
            accumulator: 0.0,
            ticks: 0,
        }
    }

    /// Duration of one tick in seconds
    pub fn step(&self) -> f32 {
        self.step as f32
    }

    /// Total ticks handed out so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Add elapsed real time and return how many ticks are now due.
    ///
    /// Elapsed time is clamped to [`Params::MAX_FRAME_DT`] so a stalled
    /// window does not trigger a long burst of catch-up ticks.
    pub fn accumulate(&mut self, elapsed: f32) -> u32 {
        let elapsed = if elapsed.is_finite() {
            elapsed.clamp(0.0, Params::MAX_FRAME_DT) as f64
        } else {
            0.0
        };
        self.accumulator += elapsed;

        let mut due = 0;
        while self.accumulator >= self.step {
            self.accumulator -= self.step;
            due += 1;
        }
        self.ticks += due as u64;
        due
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        Self::new(Params::TICK_RATE_HZ)
    }
}
