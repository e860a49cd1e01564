//! Clock adapters.

use crate::domain::foundation::Timestamp;
use crate::ports::Clock;

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// Always reports the same instant.
///
/// Used by tests and by demo runs that replay a specific day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    now: Timestamp,
}

impl FixedClock {
    pub fn at(now: Timestamp) -> Self {
        Self { now }
    }

    /// Returns a clock `days` later than this one.
    pub fn advanced_by_days(&self, days: i64) -> Self {
        Self::at(self.now.add_days(days))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_returns_pinned_instant() {
        let instant = Timestamp::parse_rfc3339("now", "2025-04-11T23:59:59Z").unwrap();
        let clock = FixedClock::at(instant);
        assert_eq!(clock.now(), instant);
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn advancing_moves_whole_days() {
        let instant = Timestamp::parse_rfc3339("now", "2025-04-11T12:00:00Z").unwrap();
        let later = FixedClock::at(instant).advanced_by_days(2);
        assert_eq!(later.now().date().to_string(), "2025-04-13");
    }

    #[test]
    fn system_clock_moves_forward() {
        let first = SystemClock.now();
        let second = SystemClock.now();
        assert!(!second.is_before(&first));
    }
}
