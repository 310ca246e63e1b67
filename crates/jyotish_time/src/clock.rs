//! Injectable time sources.

use chrono::{Duration, Utc};
use parking_lot::Mutex;

use crate::instant::Instant;

/// Source of "now" for components that evaluate the current sky.
pub trait TimeSource: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall-clock time from the operating system, in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> Instant {
        Instant::from_utc(Utc::now())
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    current: Mutex<Instant>,
}

impl ManualClock {
    pub fn new(start: Instant) -> Self {
        Self {
            current: Mutex::new(start),
        }
    }

    /// Move the clock to an absolute instant.
    pub fn set(&self, to: Instant) {
        *self.current.lock() = to;
    }

    /// Move the clock forward (or backward, for negative durations).
    pub fn advance(&self, by: Duration) {
        let mut current = self.current.lock();
        if let Some(next) = current.civil().checked_add_signed(by) {
            *current = Instant::new(next);
        }
    }
}

impl TimeSource for ManualClock {
    fn now(&self) -> Instant {
        *self.current.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_advances() {
        let start = Instant::parse("2024-01-01T00:00:00Z").unwrap();
        let clock = ManualClock::new(start);
        assert_eq!(clock.now(), start);
        clock.advance(Duration::hours(7));
        assert_eq!(clock.now().utc().to_rfc3339(), "2024-01-01T07:00:00+00:00");
    }

    #[test]
    fn manual_clock_set() {
        let clock = ManualClock::new(Instant::parse("2024-01-01T00:00:00Z").unwrap());
        let later = Instant::parse("2030-06-01T12:00:00+02:00").unwrap();
        clock.set(later);
        assert_eq!(clock.now(), later);
    }

    #[test]
    fn system_clock_is_recent() {
        let now = SystemClock.now();
        assert!(now.utc_year() >= 2024);
    }
}
