//! Membership domain module.
//!
//! Derived plan state for the dashboard and subscription pages.
//!
//! # Module Structure
//!
//! - `plan` - MembershipPlan validity window and the day-count adapter
//! - `calculator` - MembershipStateCalculator (progress, countdown, expiry, usage)
//! - `expiry` - ExpiryStatus classification
//! - `usage` - UsageCounter and the unlimited sentinel
//! - `tier` - PlanTier levels and billing cycle
//! - `allowances` - Monthly caps per tier
//! - `catalog` - Plan offers and tier changes
//! - `record` - MembershipRecord snapshot supplied by readers

mod allowances;
mod calculator;
mod catalog;
mod errors;
mod expiry;
mod plan;
mod record;
mod tier;
mod usage;

pub use allowances::PlanAllowances;
pub use calculator::MembershipStateCalculator;
pub use catalog::{PlanChange, PlanChangeKind, PlanOffer};
pub use errors::MembershipError;
pub use expiry::{countdown_label, ExpiryStatus, DEFAULT_WARNING_THRESHOLD_DAYS};
pub use plan::{DayCountPlan, MembershipPlan};
pub use record::{MembershipRecord, Notification, NotificationKind};
pub use tier::{BillingCycle, PlanTier};
pub use usage::{UsageCounter, UsageKind, UsageLimit, ZERO_LIMIT_OVERUSE_RATIO};
