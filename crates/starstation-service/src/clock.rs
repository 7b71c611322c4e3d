//! Wall-clock source for deployments

use starstation_core::{Clock, TimestampMs};

/// Real wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> TimestampMs {
        chrono::Utc::now().timestamp_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_recent() {
        // 2020-01-01 in epoch milliseconds; anything earlier means a broken source
        assert!(SystemClock.now_ms() > 1_577_836_800_000);
    }
}
