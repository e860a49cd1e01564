//! Membership tier definitions.
//!
//! Represents the plan levels offered on the subscription page.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Membership plan tier.
///
/// Determines allowances and monthly price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    /// Equipment access during limited hours.
    Basic,

    /// Full equipment access, group classes, two trainer sessions a month.
    Premium,

    /// Everything in Premium plus unlimited personal training.
    Elite,
}

impl PlanTier {
    /// All tiers in ascending rank order.
    pub const ALL: [PlanTier; 3] = [PlanTier::Basic, PlanTier::Premium, PlanTier::Elite];

    /// Returns the display name for this tier.
    pub fn display_name(&self) -> &'static str {
        match self {
            PlanTier::Basic => "Basic",
            PlanTier::Premium => "Premium",
            PlanTier::Elite => "Elite",
        }
    }

    /// Returns the numeric rank of this tier for comparison.
    ///
    /// Higher rank = more features. Used for upgrade classification.
    pub fn rank(&self) -> u8 {
        match self {
            PlanTier::Basic => 0,
            PlanTier::Premium => 1,
            PlanTier::Elite => 2,
        }
    }

    /// Monthly price in cents.
    pub fn monthly_price_cents(&self) -> i64 {
        match self {
            PlanTier::Basic => 2999,
            PlanTier::Premium => 4999,
            PlanTier::Elite => 7999,
        }
    }
}

impl std::fmt::Display for PlanTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for PlanTier {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlanTier::ALL
            .into_iter()
            .find(|tier| tier.display_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::unknown_variant("tier", s))
    }
}

/// How often a plan is billed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    Monthly,
}

impl BillingCycle {
    pub fn label(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "monthly",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_ascend_with_price() {
        for pair in PlanTier::ALL.windows(2) {
            assert!(pair[0].rank() < pair[1].rank());
            assert!(pair[0].monthly_price_cents() < pair[1].monthly_price_cents());
        }
    }

    #[test]
    fn display_names_are_correct() {
        assert_eq!(PlanTier::Basic.display_name(), "Basic");
        assert_eq!(PlanTier::Premium.display_name(), "Premium");
        assert_eq!(PlanTier::Elite.display_name(), "Elite");
    }

    #[test]
    fn parses_display_name_case_insensitively() {
        assert_eq!("premium".parse::<PlanTier>().unwrap(), PlanTier::Premium);
        assert_eq!(" Elite ".parse::<PlanTier>().unwrap(), PlanTier::Elite);
    }

    #[test]
    fn rejects_unknown_tier() {
        match "Platinum".parse::<PlanTier>() {
            Err(ValidationError::UnknownVariant { field, value }) => {
                assert_eq!(field, "tier");
                assert_eq!(value, "Platinum");
            }
            _ => panic!("Expected UnknownVariant error"),
        }
    }

    #[test]
    fn tier_serializes_lowercase() {
        let json = serde_json::to_string(&PlanTier::Premium).unwrap();
        assert_eq!(json, "\"premium\"");
    }

    #[test]
    fn tier_deserializes_from_lowercase() {
        let tier: PlanTier = serde_json::from_str("\"elite\"").unwrap();
        assert_eq!(tier, PlanTier::Elite);
    }
}
