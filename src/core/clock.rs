//! Tick pacing decoupled from the host loop.

use std::time::Duration;

/// Converts wall-clock elapsed time into discrete tick events.
///
/// The accumulator resets to zero when a tick fires rather than subtracting
/// the interval, so overdue time is never banked: at most one tick fires per
/// check no matter how long the host stalled.
#[derive(Debug, Clone)]
pub struct PacingClock {
    interval: Duration,
    accumulated: Duration,
}

impl PacingClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            accumulated: Duration::ZERO,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Add `elapsed` to the accumulator and report whether a tick is due.
    pub fn tick_due(&mut self, elapsed: Duration) -> bool {
        self.accumulated += elapsed;
        if self.accumulated >= self.interval {
            self.accumulated = Duration::ZERO;
            true
        } else {
            false
        }
    }

    /// Time remaining until the next tick would fire, assuming no further
    /// elapsed time. Hosts use this as their input-poll timeout.
    pub fn remaining(&self) -> Duration {
        self.interval.saturating_sub(self.accumulated)
    }
}
