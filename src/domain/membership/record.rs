//! Membership record as supplied by the account service.
//!
//! Records are read-only snapshots. Nothing in this crate mutates them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::MemberId;

use super::{MembershipPlan, PlanTier, UsageCounter, UsageKind};

/// A member's current plan, usage and inbox.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MembershipRecord {
    pub member_id: MemberId,
    pub member_name: String,
    pub tier: PlanTier,
    pub plan: MembershipPlan,
    pub member_since: NaiveDate,
    pub usage: Vec<UsageCounter>,
    #[serde(default)]
    pub notifications: Vec<Notification>,
}

impl MembershipRecord {
    /// Counter for one resource kind, if the record tracks it.
    pub fn usage_for(&self, kind: UsageKind) -> Option<&UsageCounter> {
        self.usage.iter().find(|c| c.kind == kind)
    }

    /// Number of notifications not yet marked read.
    pub fn unread_notifications(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }
}

/// Severity of a dashboard notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Warning,
    Success,
}

/// A message shown in the dashboard inbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u32,
    pub kind: NotificationKind,
    pub message: String,
    pub read: bool,
}
