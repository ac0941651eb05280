//! Cooperative periodic tasks
//!
//! The control loop is a single thread polling a handful of tasks
//! (frame rendering, time resync, command handling, heartbeat), each
//! gated by its own deadline. A task body must complete within its
//! tick; work that cannot run now is deferred whole to a later tick.

use embassy_time::{Duration, Instant};

/// Deadline tracker for one periodic task.
///
/// The first `poll` fires immediately. If the caller falls more than
/// two periods behind, the deadline resets to now instead of firing a
/// catch-up burst.
#[derive(Debug, Clone, Copy)]
pub struct Periodic {
    period: Duration,
    next_due: Instant,
}

impl Periodic {
    pub const fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: Instant::from_millis(0),
        }
    }

    pub const fn period(&self) -> Duration {
        self.period
    }

    pub const fn next_due(&self) -> Instant {
        self.next_due
    }

    /// Returns true at most once per call when the task is due, and
    /// advances the deadline by one period.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }

        let max_drift_ms = self.period.as_millis() * 2;
        if now.as_millis() > self.next_due.as_millis() + max_drift_ms {
            self.next_due = now;
        }
        self.next_due += self.period;
        true
    }

    /// Push the deadline out without running.
    ///
    /// Used by tasks that failed and want to retry later rather than
    /// on the next tick, e.g. an unreachable time server.
    pub fn defer(&mut self, by: Duration) {
        self.next_due += by;
    }

    /// Time remaining until the task is due, zero if already due.
    pub fn until_due(&self, now: Instant) -> Duration {
        if self.next_due.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_due.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        }
    }
}
