//! GetMembershipOverviewHandler - Query handler for the dashboard plan card.
//!
//! Reads the member's record and runs it through the membership calculator
//! at the clock's current instant.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::foundation::{MemberId, Percentage, Timestamp};
use crate::domain::membership::{
    countdown_label, ExpiryStatus, MembershipError, MembershipRecord, MembershipStateCalculator,
    PlanTier, UsageCounter, UsageKind, UsageLimit, DEFAULT_WARNING_THRESHOLD_DAYS,
};
use crate::ports::{Clock, MembershipReader};

/// Query to get a member's plan overview.
#[derive(Debug, Clone)]
pub struct GetMembershipOverviewQuery {
    pub member_id: MemberId,
}

/// Plan card contents for the dashboard and subscription pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MembershipOverview {
    pub member_id: MemberId,
    pub member_name: String,
    pub member_since: NaiveDate,
    pub tier: PlanTier,
    pub tier_name: String,
    pub plan_start: Timestamp,
    pub plan_end: Timestamp,
    /// Unrounded elapsed percentage in `[0, 100]`.
    pub elapsed_percentage: f64,
    /// Elapsed percentage rounded for the progress bar label.
    pub elapsed_rounded: u8,
    pub days_remaining: i64,
    pub expiry_status: ExpiryStatus,
    pub countdown_label: String,
    pub usage: Vec<UsageLine>,
    pub unread_notifications: usize,
    pub evaluated_at: Timestamp,
}

/// One row of the "this month's usage" panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageLine {
    pub kind: UsageKind,
    pub label: String,
    pub used: u32,
    pub limit: UsageLimit,
    /// "1/2" or "12/Unlimited".
    pub fraction_label: String,
    /// Unclamped `used / limit * 100`; `None` when unlimited.
    pub ratio: Option<f64>,
    /// Bar fill in percent, clamped to 100; `None` hides the bar.
    pub bar_width: Option<u8>,
    pub over_limit: bool,
}

impl UsageLine {
    fn from_counter(counter: &UsageCounter) -> Self {
        let ratio = MembershipStateCalculator::usage_ratio(counter);
        Self {
            kind: counter.kind,
            label: counter.kind.display_name().to_string(),
            used: counter.used,
            limit: counter.limit,
            fraction_label: counter.fraction_label(),
            ratio,
            bar_width: ratio.map(|r| Percentage::clamped(r).rounded()),
            over_limit: counter.is_over_limit(),
        }
    }
}

/// Result of a successful overview query.
pub type GetMembershipOverviewResult = MembershipOverview;

/// Handler for the membership overview.
///
/// Fails with `MembershipError::NotFound` when the member has no record.
pub struct GetMembershipOverviewHandler {
    reader: Arc<dyn MembershipReader>,
    clock: Arc<dyn Clock>,
    warning_threshold_days: u32,
}

impl GetMembershipOverviewHandler {
    pub fn new(reader: Arc<dyn MembershipReader>, clock: Arc<dyn Clock>) -> Self {
        Self {
            reader,
            clock,
            warning_threshold_days: DEFAULT_WARNING_THRESHOLD_DAYS,
        }
    }

    /// Overrides the number of days at which a plan counts as expiring.
    pub fn with_warning_threshold(mut self, days: u32) -> Self {
        self.warning_threshold_days = days;
        self
    }

    pub async fn handle(
        &self,
        query: GetMembershipOverviewQuery,
    ) -> Result<GetMembershipOverviewResult, MembershipError> {
        let record = self
            .reader
            .get_by_member(&query.member_id)
            .await
            .map_err(|e| MembershipError::infrastructure(e.to_string()))?
            .ok_or(MembershipError::NotFound(query.member_id))?;

        let now = self.clock.now();
        let overview = self.build(record, now);

        debug!(
            member_id = %overview.member_id,
            days_remaining = overview.days_remaining,
            status = %overview.expiry_status,
            "membership overview computed"
        );
        Ok(overview)
    }

    fn build(&self, record: MembershipRecord, now: Timestamp) -> MembershipOverview {
        let plan = record.plan;
        if plan.is_inverted() {
            warn!(
                member_id = %record.member_id,
                start = %plan.start().as_datetime(),
                end = %plan.end().as_datetime(),
                "plan window ends before it starts; reporting as complete"
            );
        }

        let elapsed = MembershipStateCalculator::elapsed_percentage(&plan, now);
        let days_remaining = MembershipStateCalculator::days_remaining(&plan, now);
        let expiry_status = ExpiryStatus::classify(days_remaining, self.warning_threshold_days);
        let unread_notifications = record.unread_notifications();

        MembershipOverview {
            member_id: record.member_id,
            member_since: record.member_since,
            tier: record.tier,
            tier_name: record.tier.display_name().to_string(),
            plan_start: plan.start(),
            plan_end: plan.end(),
            elapsed_percentage: elapsed.value(),
            elapsed_rounded: elapsed.rounded(),
            days_remaining,
            expiry_status,
            countdown_label: countdown_label(days_remaining),
            usage: record.usage.iter().map(UsageLine::from_counter).collect(),
            unread_notifications,
            evaluated_at: now,
            member_name: record.member_name,
        }
    }
}
