//! Plan catalog shown on the subscription page.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::format_cents;

use super::{BillingCycle, PlanAllowances, PlanTier};

/// A plan as offered to members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanOffer {
    pub tier: PlanTier,
    pub price_cents: i64,
    pub billing_cycle: BillingCycle,
    pub features: Vec<String>,
    /// Highlighted as the most popular choice.
    pub popular: bool,
    pub allowances: PlanAllowances,
}

impl PlanOffer {
    /// The offer for a tier.
    pub fn for_tier(tier: PlanTier) -> Self {
        let features: &[&str] = match tier {
            PlanTier::Basic => &[
                "Access to gym equipment",
                "Basic fitness assessment",
                "Limited hours (6am-8pm)",
            ],
            PlanTier::Premium => &[
                "Unlimited access to all equipment",
                "Group fitness classes included",
                "Personal trainer session (2x/month)",
                "Locker rental included",
                "Guest passes (2 per month)",
            ],
            PlanTier::Elite => &[
                "All Premium features",
                "Unlimited personal training sessions",
                "Nutrition consultation",
                "Spa access",
                "Priority class booking",
            ],
        };

        Self {
            tier,
            price_cents: tier.monthly_price_cents(),
            billing_cycle: BillingCycle::Monthly,
            features: features.iter().map(|f| f.to_string()).collect(),
            popular: tier == PlanTier::Premium,
            allowances: PlanAllowances::for_tier(tier),
        }
    }

    /// Every offer, cheapest first.
    pub fn catalog() -> Vec<PlanOffer> {
        PlanTier::ALL.into_iter().map(Self::for_tier).collect()
    }

    /// Price formatted like `$49.99`.
    pub fn price_label(&self) -> String {
        format_cents(self.price_cents)
    }
}

/// Direction of a move from one tier to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanChangeKind {
    Upgrade,
    Downgrade,
    Unchanged,
}

/// Effect of switching from the current tier to a target tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanChange {
    pub from: PlanTier,
    pub to: PlanTier,
    pub kind: PlanChangeKind,
    /// Monthly price difference in cents. Negative for downgrades.
    pub price_delta_cents: i64,
}

impl PlanChange {
    pub fn between(from: PlanTier, to: PlanTier) -> Self {
        let kind = match to.rank().cmp(&from.rank()) {
            std::cmp::Ordering::Greater => PlanChangeKind::Upgrade,
            std::cmp::Ordering::Less => PlanChangeKind::Downgrade,
            std::cmp::Ordering::Equal => PlanChangeKind::Unchanged,
        };

        Self {
            from,
            to,
            kind,
            price_delta_cents: to.monthly_price_cents() - from.monthly_price_cents(),
        }
    }
}
