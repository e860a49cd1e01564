//! Membership State Calculator - derived display values for a plan.
//!
//! Every function here is total: bad windows and zero caps degrade to the
//! documented sentinels instead of panicking or producing NaN.

use crate::domain::foundation::{Percentage, Timestamp, MILLIS_PER_DAY};

use super::{ExpiryStatus, MembershipPlan, UsageCounter, UsageLimit, ZERO_LIMIT_OVERUSE_RATIO};

/// Rounds a signed millisecond span up to whole days.
pub(crate) fn ceil_days(millis: i64) -> i64 {
    let days = millis.div_euclid(MILLIS_PER_DAY);
    if millis.rem_euclid(MILLIS_PER_DAY) == 0 {
        days
    } else {
        days + 1
    }
}

/// Calculator for plan progress, countdowns, expiry and usage ratios.
pub struct MembershipStateCalculator;

impl MembershipStateCalculator {
    /// Share of the plan window that has passed at `now`, clamped to `[0, 100]`.
    ///
    /// # Edge Cases
    /// - `now` before start: 0
    /// - `now` at or after end: 100
    /// - Zero-length or inverted window: 100
    pub fn elapsed_percentage(plan: &MembershipPlan, now: Timestamp) -> Percentage {
        let total = plan.duration_millis();
        if total <= 0 {
            return Percentage::HUNDRED;
        }

        let elapsed = now.millis_since(&plan.start());
        Percentage::clamped(elapsed as f64 / total as f64 * 100.0)
    }

    /// [`Self::elapsed_percentage`] against the system clock.
    pub fn elapsed_percentage_now(plan: &MembershipPlan) -> Percentage {
        Self::elapsed_percentage(plan, Timestamp::now())
    }

    /// Whole days until the plan ends, rounded up.
    ///
    /// Not clamped: `0` means the plan ends today, negative means it already
    /// ended that many days ago.
    pub fn days_remaining(plan: &MembershipPlan, now: Timestamp) -> i64 {
        ceil_days(plan.end().millis_since(&now))
    }

    /// [`Self::days_remaining`] against the system clock.
    pub fn days_remaining_now(plan: &MembershipPlan) -> i64 {
        Self::days_remaining(plan, Timestamp::now())
    }

    /// Used share of a capped resource, in percent.
    ///
    /// Returns `None` for unlimited resources. Not clamped, so over-use reads
    /// above 100.
    ///
    /// # Edge Cases
    /// - Cap of zero, nothing used: `Some(0.0)`
    /// - Cap of zero, anything used: `Some(ZERO_LIMIT_OVERUSE_RATIO)`
    pub fn usage_ratio(counter: &UsageCounter) -> Option<f64> {
        match counter.limit {
            UsageLimit::Unlimited => None,
            UsageLimit::Limited(0) if counter.used == 0 => Some(0.0),
            UsageLimit::Limited(0) => Some(ZERO_LIMIT_OVERUSE_RATIO),
            UsageLimit::Limited(cap) => Some(f64::from(counter.used) / f64::from(cap) * 100.0),
        }
    }

    /// Classifies the plan as active, expiring soon, or expired at `now`.
    pub fn expiry_status(
        plan: &MembershipPlan,
        now: Timestamp,
        warning_threshold_days: u32,
    ) -> ExpiryStatus {
        ExpiryStatus::classify(Self::days_remaining(plan, now), warning_threshold_days)
    }
}
