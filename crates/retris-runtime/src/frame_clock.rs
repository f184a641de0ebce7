use std::time::{Duration, Instant};

use log::debug;

/// Deadline tracker for a fixed frame rate.
///
/// Deadlines are spaced exactly one interval apart, so a frame that finishes early
/// or slightly late does not shift the cadence. A frame that overruns the next
/// deadline entirely restarts the cadence from the current time instead of running
/// a burst of catch-up frames.
#[derive(Debug, Clone)]
pub(crate) struct FrameClock {
    interval: Duration,
    next_frame: Instant,
}

impl FrameClock {
    pub(crate) fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_frame: now + interval,
        }
    }

    pub(crate) fn interval(&self) -> Duration {
        self.interval
    }

    /// Changes the interval and restarts the cadence at `now`.
    pub(crate) fn set_interval(&mut self, interval: Duration, now: Instant) {
        self.interval = interval;
        self.reset(now);
    }

    /// Restarts the cadence so the next deadline is one interval after `now`.
    pub(crate) fn reset(&mut self, now: Instant) {
        self.next_frame = now + self.interval;
    }

    /// Time left until the current frame's deadline.
    pub(crate) fn remaining(&self, now: Instant) -> Duration {
        self.next_frame.saturating_duration_since(now)
    }

    /// Moves to the next frame's deadline.
    pub(crate) fn advance(&mut self, now: Instant) {
        self.next_frame += self.interval;
        if self.next_frame < now {
            debug!(
                "frame overran by {:?}, resyncing",
                now.duration_since(self.next_frame)
            );
            self.next_frame = now + self.interval;
        }
    }
}
