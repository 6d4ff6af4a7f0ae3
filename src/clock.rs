/// Session countdown and the wall-clock → logical-tick converter.

use std::time::Duration;

/// Remaining session time, in ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
}

impl Countdown {
    pub fn new(ticks: u32) -> Self {
        Self { remaining: ticks }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Count down one tick.  Returns `true` when time has run out.
    pub fn tick(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining == 0
    }

    /// `MM:SS`, assuming 60 ticks per second: 3600 ticks to the minute and
    /// 60 ticks to the second.
    pub fn display(&self) -> String {
        let minutes = self.remaining / 3600;
        let seconds = (self.remaining % 3600) / 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

/// Fixed-timestep driver.  The host feeds it real elapsed time and runs
/// however many whole ticks it hands back, so render cadence never leaks
/// into simulation speed.
#[derive(Clone, Debug)]
pub struct SimulationClock {
    step: Duration,
    accumulator: Duration,
    max_catch_up: u32,
}

impl SimulationClock {
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            step: Duration::from_secs(1) / ticks_per_second.max(1),
            accumulator: Duration::ZERO,
            max_catch_up: 5,
        }
    }

    /// Cap on ticks returned by a single `advance`; time beyond it is dropped.
    pub fn with_max_catch_up(mut self, ticks: u32) -> Self {
        self.max_catch_up = ticks.max(1);
        self
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    /// Add `elapsed` wall time and return the number of ticks now due.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;
        let mut ticks = 0;
        while self.accumulator >= self.step {
            self.accumulator -= self.step;
            ticks += 1;
            if ticks == self.max_catch_up {
                // A stalled host should not trigger a burst of catch-up ticks.
                self.accumulator = Duration::ZERO;
                break;
            }
        }
        ticks
    }

    /// Forget any partial tick, e.g. after a pause.
    pub fn reset(&mut self) {
        self.accumulator = Duration::ZERO;
    }
}
