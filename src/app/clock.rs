use std::time::{Duration, Instant};

/// Fixed-rate frame pacing. Input is drained until the deadline, then one update and one
/// redraw run. A late frame does not try to catch up.
#[derive(Debug, Clone)]
pub struct FrameClock {
    interval: Duration,
    deadline: Instant,
}

impl FrameClock {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            deadline: now + interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time left in the current frame, `None` once the frame is due.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        let left = self.deadline.checked_duration_since(now)?;
        if left.is_zero() {
            return None;
        }
        Some(left)
    }

    pub fn advance(&mut self, now: Instant) {
        self.deadline += self.interval;
        if self.deadline <= now {
            self.deadline = now + self.interval;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/clock.rs"]
mod tests;
