//! Tier-based resource allowances.
//!
//! Defines the monthly caps each plan tier carries for consumable resources.

use serde::{Deserialize, Serialize};

use super::{PlanTier, UsageCounter, UsageKind, UsageLimit};

/// Monthly allowances for a plan tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanAllowances {
    /// The tier these allowances apply to.
    pub tier: PlanTier,
    pub gym_visits: UsageLimit,
    pub personal_training: UsageLimit,
    pub group_classes: UsageLimit,
    pub guest_passes: UsageLimit,
}

impl PlanAllowances {
    /// Get the allowances for a specific tier.
    ///
    /// | Tier | Gym visits | Personal training | Group classes | Guest passes |
    /// |------|------------|-------------------|---------------|--------------|
    /// | Basic | Unlimited | 0 | 0 | 0 |
    /// | Premium | Unlimited | 2 | Unlimited | 2 |
    /// | Elite | Unlimited | Unlimited | Unlimited | 2 |
    pub fn for_tier(tier: PlanTier) -> Self {
        match tier {
            PlanTier::Basic => Self {
                tier,
                gym_visits: UsageLimit::Unlimited,
                personal_training: UsageLimit::Limited(0),
                group_classes: UsageLimit::Limited(0),
                guest_passes: UsageLimit::Limited(0),
            },
            PlanTier::Premium => Self {
                tier,
                gym_visits: UsageLimit::Unlimited,
                personal_training: UsageLimit::Limited(2),
                group_classes: UsageLimit::Unlimited,
                guest_passes: UsageLimit::Limited(2),
            },
            PlanTier::Elite => Self {
                tier,
                gym_visits: UsageLimit::Unlimited,
                personal_training: UsageLimit::Unlimited,
                group_classes: UsageLimit::Unlimited,
                guest_passes: UsageLimit::Limited(2),
            },
        }
    }

    /// Returns the cap for one resource kind.
    pub fn limit_for(&self, kind: UsageKind) -> UsageLimit {
        match kind {
            UsageKind::GymVisits => self.gym_visits,
            UsageKind::PersonalTraining => self.personal_training,
            UsageKind::GroupClasses => self.group_classes,
            UsageKind::GuestPasses => self.guest_passes,
        }
    }

    /// Builds a counter for `kind` with this tier's cap.
    pub fn counter(&self, kind: UsageKind, used: u32) -> UsageCounter {
        UsageCounter::new(kind, used, self.limit_for(kind))
    }

    /// Check if the allowance for `kind` has been used up.
    ///
    /// Returns false if unlimited or under the cap.
    pub fn limit_reached(&self, kind: UsageKind, used: u32) -> bool {
        self.limit_for(kind)
            .cap()
            .map(|cap| used >= cap)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tier_has_unlimited_gym_visits() {
        for tier in PlanTier::ALL {
            assert!(PlanAllowances::for_tier(tier).gym_visits.is_unlimited());
        }
    }

    #[test]
    fn basic_tier_has_no_training_or_classes() {
        let allowances = PlanAllowances::for_tier(PlanTier::Basic);
        assert_eq!(allowances.personal_training, UsageLimit::Limited(0));
        assert_eq!(allowances.group_classes, UsageLimit::Limited(0));
    }

    #[test]
    fn premium_tier_has_two_training_sessions() {
        let allowances = PlanAllowances::for_tier(PlanTier::Premium);
        assert_eq!(allowances.personal_training, UsageLimit::Limited(2));
        assert!(allowances.group_classes.is_unlimited());
        assert_eq!(allowances.guest_passes, UsageLimit::Limited(2));
    }

    #[test]
    fn elite_tier_has_unlimited_training() {
        let allowances = PlanAllowances::for_tier(PlanTier::Elite);
        assert!(allowances.personal_training.is_unlimited());
    }

    #[test]
    fn counter_uses_tier_cap() {
        let allowances = PlanAllowances::for_tier(PlanTier::Premium);
        let counter = allowances.counter(UsageKind::PersonalTraining, 1);
        assert_eq!(counter, UsageCounter::limited(UsageKind::PersonalTraining, 1, 2));
    }

    #[test]
    fn limit_reached_when_at_cap() {
        let allowances = PlanAllowances::for_tier(PlanTier::Premium);
        assert!(allowances.limit_reached(UsageKind::PersonalTraining, 2));
        assert!(!allowances.limit_reached(UsageKind::PersonalTraining, 1));
    }

    #[test]
    fn limit_reached_immediately_for_zero_cap() {
        let allowances = PlanAllowances::for_tier(PlanTier::Basic);
        assert!(allowances.limit_reached(UsageKind::GuestPasses, 0));
    }

    #[test]
    fn limit_never_reached_for_unlimited() {
        let allowances = PlanAllowances::for_tier(PlanTier::Elite);
        assert!(!allowances.limit_reached(UsageKind::PersonalTraining, 1000));
    }
}
