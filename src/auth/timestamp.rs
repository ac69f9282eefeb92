//! Timestamping for BingX API authentication.
//!
//! Every signed request carries a `timestamp` parameter in milliseconds since
//! the UNIX epoch; the server rejects requests whose timestamp falls outside
//! its receive window.

use std::time::{SystemTime, UNIX_EPOCH};

/// Trait for providing timestamps for signed requests.
///
/// The default implementation reads the system clock. Tests can inject a
/// fixed clock to make signed request parameters deterministic.
pub trait TimestampProvider: Send + Sync {
    /// Current time in milliseconds since the UNIX epoch.
    fn unix_millis(&self) -> u64;
}

/// Timestamp provider backed by the system clock.
pub struct SystemClock;

impl TimestampProvider for SystemClock {
    fn unix_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_current() {
        let clock = SystemClock;
        // Well past 2023-01-01 and monotone enough for wall-clock purposes.
        let first = clock.unix_millis();
        let second = clock.unix_millis();
        assert!(first > 1_672_531_200_000);
        assert!(second >= first);
    }
}
