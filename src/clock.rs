//! Wall-clock time and sub-minute progress
//!
//! The external time source only reports hours and minutes. The
//! sub-minute fraction that drives the sweeping hands is synthesized
//! from elapsed monotonic time since the last observed minute change,
//! so its precision is bounded by the resync cadence of the time
//! source, not by a real seconds counter.

use embassy_time::Instant;

const MINUTE_MS: u64 = 60_000;

/// Time as reported by the external source, once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClockTime {
    /// Hour, 0-23.
    pub hour: u8,
    /// Minute, 0-59.
    pub minute: u8,
}

impl ClockTime {
    pub const fn new(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }
}

/// Tracks minute boundaries to derive within-minute progress.
#[derive(Debug, Clone, Copy)]
pub struct MinuteTracker {
    last_minute: Option<u8>,
    minute_started: Instant,
}

impl Default for MinuteTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl MinuteTracker {
    pub const fn new() -> Self {
        Self {
            last_minute: None,
            minute_started: Instant::from_millis(0),
        }
    }

    /// Observe the current time and return the fraction of the minute
    /// elapsed, in `[0.0, 1.0)`.
    ///
    /// The first observation and every minute change reset the
    /// reference instant. A late minute update from the time source
    /// clamps the fraction just below 1.0 instead of wrapping the
    /// hands ahead.
    #[allow(clippy::cast_precision_loss)]
    pub fn seconds_fraction(&mut self, now: Instant, minute: u8) -> f32 {
        if self.last_minute != Some(minute) {
            self.last_minute = Some(minute);
            self.minute_started = now;
            return 0.0;
        }

        let elapsed_ms = now.duration_since(self.minute_started).as_millis();
        if elapsed_ms >= MINUTE_MS {
            return (MINUTE_MS - 1) as f32 / MINUTE_MS as f32;
        }
        elapsed_ms as f32 / MINUTE_MS as f32
    }
}
