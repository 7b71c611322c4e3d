//! Wall-clock time as millisecond epoch timestamps
//!
//! Every operation takes `now` explicitly, and the service layer injects it
//! through the [`Clock`] trait. Nothing in the domain reads ambient time.

use std::sync::atomic::{AtomicI64, Ordering};

/// Milliseconds since the Unix epoch
pub type TimestampMs = i64;

/// Milliseconds in one minute, the accrual quantum
pub const MS_PER_MINUTE: i64 = 60_000;

/// Source of the current wall-clock time
pub trait Clock {
    /// Current time in milliseconds since the Unix epoch
    fn now_ms(&self) -> TimestampMs;
}

/// A clock advanced by hand, for tests and offline simulation
#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicI64,
}

impl ManualClock {
    /// Create a clock frozen at the given timestamp
    pub fn at(now: TimestampMs) -> Self {
        Self {
            now: AtomicI64::new(now),
        }
    }

    /// Move the clock forward
    pub fn advance(&self, ms: i64) {
        self.now.fetch_add(ms, Ordering::SeqCst);
    }

    /// Jump the clock to an absolute timestamp
    pub fn set(&self, now: TimestampMs) {
        self.now.store(now, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> TimestampMs {
        self.now.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock() {
        let clock = ManualClock::at(1_000);
        assert_eq!(clock.now_ms(), 1_000);

        clock.advance(90_000);
        assert_eq!(clock.now_ms(), 91_000);

        clock.set(5);
        assert_eq!(clock.now_ms(), 5);
    }
}
