//! Expiry classification of a plan's remaining time.

use serde::{Deserialize, Serialize};

/// Default number of days before the end at which a plan counts as expiring.
pub const DEFAULT_WARNING_THRESHOLD_DAYS: u32 = 3;

/// Three-way classification of a plan's remaining-time state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryStatus {
    /// More than the warning threshold remains.
    Active,

    /// Between one day and the warning threshold remains.
    ExpiringSoon,

    /// Zero or fewer days remain.
    Expired,
}

impl ExpiryStatus {
    /// Classifies a signed remaining-day count.
    ///
    /// | days remaining | status |
    /// |---|---|
    /// | `<= 0` | Expired |
    /// | `1..=threshold` | ExpiringSoon |
    /// | `> threshold` | Active |
    pub fn classify(days_remaining: i64, warning_threshold_days: u32) -> Self {
        if days_remaining <= 0 {
            ExpiryStatus::Expired
        } else if days_remaining <= i64::from(warning_threshold_days) {
            ExpiryStatus::ExpiringSoon
        } else {
            ExpiryStatus::Active
        }
    }

    /// Returns true if the member should be nudged to renew.
    pub fn needs_attention(&self) -> bool {
        !matches!(self, ExpiryStatus::Active)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExpiryStatus::Active => "Active",
            ExpiryStatus::ExpiringSoon => "Expiring Soon",
            ExpiryStatus::Expired => "Expired",
        }
    }
}

/// Countdown text under the plan progress bar.
///
/// "3 days left in your current plan", "1 day left in your current plan",
/// or "Your plan has expired" once nothing remains.
pub fn countdown_label(days_remaining: i64) -> String {
    match days_remaining {
        d if d <= 0 => "Your plan has expired".to_string(),
        1 => "1 day left in your current plan".to_string(),
        d => format!("{} days left in your current plan", d),
    }
}

impl std::fmt::Display for ExpiryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
