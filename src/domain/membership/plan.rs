//! Membership plan validity windows.
//!
//! The date pair is the canonical representation. [`DayCountPlan`] converts
//! the "days left of total days" form used by older views into a date pair.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, ValidationError};

use super::calculator::ceil_days;

/// Validity window of a membership plan.
///
/// # Invariants
///
/// - `start <= end` is expected but not enforced; an inverted window is
///   treated as already complete by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipPlan {
    start: Timestamp,
    end: Timestamp,
}

impl MembershipPlan {
    pub fn new(start: Timestamp, end: Timestamp) -> Self {
        Self { start, end }
    }

    /// Creates a plan from calendar dates, each at 00:00 UTC.
    pub fn from_dates(start: NaiveDate, end: NaiveDate) -> Self {
        Self::new(Timestamp::from_date(start), Timestamp::from_date(end))
    }

    /// Parses a plan from ISO dates such as `2025-03-15`.
    pub fn parse(start: &str, end: &str) -> Result<Self, ValidationError> {
        Ok(Self::new(
            Timestamp::parse_date("start_date", start)?,
            Timestamp::parse_date("end_date", end)?,
        ))
    }

    pub fn start(&self) -> Timestamp {
        self.start
    }

    pub fn end(&self) -> Timestamp {
        self.end
    }

    /// Returns true if the window ends before it starts.
    pub fn is_inverted(&self) -> bool {
        self.end.is_before(&self.start)
    }

    /// Length of the window in milliseconds. Negative when inverted.
    pub fn duration_millis(&self) -> i64 {
        self.end.millis_since(&self.start)
    }

    /// Length of the window in whole days, rounded up. Zero when inverted.
    pub fn total_days(&self) -> u32 {
        ceil_days(self.duration_millis()).max(0) as u32
    }

    /// Converts to the day-counter form relative to `now`.
    pub fn to_day_counts(&self, now: Timestamp) -> DayCountPlan {
        DayCountPlan {
            days_left: ceil_days(self.end.millis_since(&now)),
            total_days: self.total_days(),
        }
    }
}

/// Plan expressed as remaining and total day counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCountPlan {
    /// Days until the plan ends. Zero or negative once expired.
    pub days_left: i64,
    /// Nominal length of the plan in days.
    pub total_days: u32,
}

impl DayCountPlan {
    pub fn new(days_left: i64, total_days: u32) -> Self {
        Self {
            days_left,
            total_days,
        }
    }

    /// Anchors the counters on `now` to produce a date-pair plan.
    ///
    /// `end = now + days_left`, `start = end - total_days`.
    pub fn to_plan(&self, now: Timestamp) -> MembershipPlan {
        let end = now.add_days(self.days_left);
        let start = end.minus_days(i64::from(self.total_days));
        MembershipPlan::new(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parse_reads_iso_dates() {
        let plan = MembershipPlan::parse("2025-03-15", "2025-04-14").unwrap();
        assert_eq!(plan.start().date(), date(2025, 3, 15));
        assert_eq!(plan.end().date(), date(2025, 4, 14));
    }

    #[test]
    fn parse_reports_which_date_failed() {
        let result = MembershipPlan::parse("2025-03-15", "April 14");
        match result {
            Err(ValidationError::InvalidFormat { field, .. }) => assert_eq!(field, "end_date"),
            _ => panic!("Expected InvalidFormat error"),
        }
    }

    #[test]
    fn total_days_counts_whole_days() {
        let plan = MembershipPlan::from_dates(date(2025, 3, 15), date(2025, 4, 14));
        assert_eq!(plan.total_days(), 30);
    }

    #[test]
    fn inverted_plan_is_detected_and_has_no_days() {
        let plan = MembershipPlan::from_dates(date(2025, 4, 14), date(2025, 3, 15));
        assert!(plan.is_inverted());
        assert_eq!(plan.total_days(), 0);
    }

    #[test]
    fn zero_length_plan_is_not_inverted() {
        let plan = MembershipPlan::from_dates(date(2025, 4, 14), date(2025, 4, 14));
        assert!(!plan.is_inverted());
        assert_eq!(plan.duration_millis(), 0);
    }

    #[test]
    fn day_count_plan_anchors_on_now() {
        let now = Timestamp::from_date(date(2025, 4, 12));
        let plan = DayCountPlan::new(3, 30).to_plan(now);

        assert_eq!(plan.end().date(), date(2025, 4, 15));
        assert_eq!(plan.start().date(), date(2025, 3, 16));
        assert_eq!(plan.total_days(), 30);
    }

    #[test]
    fn day_counts_convert_back_from_plan() {
        let now = Timestamp::from_date(date(2025, 4, 12));
        let counts = DayCountPlan::new(3, 30);

        assert_eq!(counts.to_plan(now).to_day_counts(now), counts);
    }

    #[test]
    fn huge_day_counts_saturate_instead_of_panicking() {
        let now = Timestamp::from_date(date(2025, 4, 12));

        let far_future = DayCountPlan::new(i64::MAX, 30).to_plan(now);
        assert!(now.is_before(&far_future.end()));
        assert!(!far_future.is_inverted());

        let far_past = DayCountPlan::new(i64::MIN, u32::MAX).to_plan(now);
        assert!(far_past.end().is_before(&now));
    }

    #[test]
    fn expired_day_counts_produce_window_in_the_past() {
        let now = Timestamp::from_date(date(2025, 4, 12));
        let plan = DayCountPlan::new(-2, 30).to_plan(now);
        assert!(plan.end().is_before(&now));
    }
}
