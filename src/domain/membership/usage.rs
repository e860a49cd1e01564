//! Consumable-resource counters (gym visits, training sessions, classes).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Ratio reported when something was consumed against a cap of zero.
///
/// Finite so it survives JSON serialisation, and larger than any real ratio.
pub const ZERO_LIMIT_OVERUSE_RATIO: f64 = f64::MAX;

/// Cap on a consumable resource.
///
/// Serialises as a number for numeric caps and as `"Unlimited"` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "UsageLimitRepr", into = "UsageLimitRepr")]
pub enum UsageLimit {
    /// Numeric cap. `Limited(0)` is a real cap, not "unlimited".
    Limited(u32),
    /// No numeric cap applies.
    Unlimited,
}

impl UsageLimit {
    pub fn is_unlimited(&self) -> bool {
        matches!(self, UsageLimit::Unlimited)
    }

    /// Returns the numeric cap, or `None` when unlimited.
    pub fn cap(&self) -> Option<u32> {
        match self {
            UsageLimit::Limited(n) => Some(*n),
            UsageLimit::Unlimited => None,
        }
    }
}

impl fmt::Display for UsageLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsageLimit::Limited(n) => write!(f, "{}", n),
            UsageLimit::Unlimited => write!(f, "Unlimited"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum UsageLimitRepr {
    Count(u32),
    Label(String),
}

impl TryFrom<UsageLimitRepr> for UsageLimit {
    type Error = ValidationError;

    fn try_from(repr: UsageLimitRepr) -> Result<Self, Self::Error> {
        match repr {
            UsageLimitRepr::Count(n) => Ok(UsageLimit::Limited(n)),
            UsageLimitRepr::Label(label) if label.trim().eq_ignore_ascii_case("unlimited") => {
                Ok(UsageLimit::Unlimited)
            }
            UsageLimitRepr::Label(label) => Err(ValidationError::unknown_variant("limit", label)),
        }
    }
}

impl From<UsageLimit> for UsageLimitRepr {
    fn from(limit: UsageLimit) -> Self {
        match limit {
            UsageLimit::Limited(n) => UsageLimitRepr::Count(n),
            UsageLimit::Unlimited => UsageLimitRepr::Label("Unlimited".to_string()),
        }
    }
}

/// Kind of resource a counter tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageKind {
    GymVisits,
    PersonalTraining,
    GroupClasses,
    GuestPasses,
}

impl UsageKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            UsageKind::GymVisits => "Gym Visits",
            UsageKind::PersonalTraining => "Personal Training",
            UsageKind::GroupClasses => "Group Classes",
            UsageKind::GuestPasses => "Guest Passes",
        }
    }
}

/// A used/limit pair for one capped resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageCounter {
    pub kind: UsageKind,
    pub used: u32,
    pub limit: UsageLimit,
}

impl UsageCounter {
    pub fn new(kind: UsageKind, used: u32, limit: UsageLimit) -> Self {
        Self { kind, used, limit }
    }

    pub fn limited(kind: UsageKind, used: u32, cap: u32) -> Self {
        Self::new(kind, used, UsageLimit::Limited(cap))
    }

    pub fn unlimited(kind: UsageKind, used: u32) -> Self {
        Self::new(kind, used, UsageLimit::Unlimited)
    }

    /// Returns true when more was used than the cap allows.
    pub fn is_over_limit(&self) -> bool {
        self.limit.cap().map(|cap| self.used > cap).unwrap_or(false)
    }

    /// Units left under the cap. `None` when unlimited.
    pub fn remaining(&self) -> Option<u32> {
        self.limit.cap().map(|cap| cap.saturating_sub(self.used))
    }

    /// "1/2" or "12/Unlimited", as shown next to usage bars.
    pub fn fraction_label(&self) -> String {
        format!("{}/{}", self.used, self.limit)
    }
}
