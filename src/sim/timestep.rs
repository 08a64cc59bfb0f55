//! Fixed timestep accumulator
//!
//! Wall-clock time is accumulated and drained in whole steps. Whatever is left
//! over carries into the next frame, so physics granularity never depends on
//! the frame rate.

/// Accumulates frame time and hands out whole simulation steps
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedTimestep {
    step: f32,
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(step: f32) -> Self {
        debug_assert!(step > 0.0, "timestep must be positive");
        Self {
            step,
            accumulator: 0.0,
        }
    }

    #[inline]
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Time carried over from previous frames, always below one step
    #[inline]
    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    /// Add `delta` seconds of wall-clock time and return how many whole steps
    /// to simulate now. Below one step nothing runs and the time is banked.
    pub fn advance(&mut self, delta: f32) -> u32 {
        let mut pending = delta + self.accumulator;

        if pending < self.step {
            self.accumulator = pending;
            return 0;
        }

        let mut steps = 0;
        while pending >= self.step {
            steps += 1;
            pending -= self.step;
        }
        self.accumulator = pending;

        steps
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
