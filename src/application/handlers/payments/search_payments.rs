//! SearchPaymentsHandler - Query handler for the payments page.
//!
//! Applies the page's search box and dropdowns to the member's history,
//! derives the status of each pending due from today's date, and sums the
//! header totals over the unfiltered account.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::domain::foundation::{format_cents, MemberId};
use crate::domain::payments::{
    PaymentError, PaymentFilter, PaymentRecord, PaymentStatus, PaymentTotals, PendingDue,
    DEFAULT_RECENT_WINDOW_DAYS,
};
use crate::ports::{Clock, PaymentReader};

/// Query for a member's payments with the page's filter state.
#[derive(Debug, Clone)]
pub struct SearchPaymentsQuery {
    pub member_id: MemberId,
    pub filter: PaymentFilter,
}

/// A pending due with its status resolved against today.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingDueView {
    pub due: PendingDue,
    pub status: PaymentStatus,
    pub days_until_due: i64,
    pub amount_label: String,
    pub payment_method_label: String,
}

impl PendingDueView {
    fn resolve(due: PendingDue, today: NaiveDate) -> Self {
        Self {
            status: due.status(today),
            days_until_due: due.days_until_due(today),
            amount_label: format_cents(due.amount_cents),
            payment_method_label: due.payment_method_label().to_string(),
            due,
        }
    }
}

/// Payments page contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentsView {
    pub today: NaiveDate,
    /// History entries passing the filter, in stored order.
    pub history: Vec<PaymentRecord>,
    /// Size of the history before filtering.
    pub history_total_count: usize,
    pub pending_dues: Vec<PendingDueView>,
    pub totals: PaymentTotals,
}

/// Handler for payment search.
pub struct SearchPaymentsHandler {
    reader: Arc<dyn PaymentReader>,
    clock: Arc<dyn Clock>,
    recent_window_days: u32,
}

impl SearchPaymentsHandler {
    pub fn new(reader: Arc<dyn PaymentReader>, clock: Arc<dyn Clock>) -> Self {
        Self {
            reader,
            clock,
            recent_window_days: DEFAULT_RECENT_WINDOW_DAYS,
        }
    }

    /// Overrides how many days back the "recent" date filter reaches.
    pub fn with_recent_window(mut self, days: u32) -> Self {
        self.recent_window_days = days;
        self
    }

    pub async fn handle(&self, query: SearchPaymentsQuery) -> Result<PaymentsView, PaymentError> {
        let account = self
            .reader
            .get_account(&query.member_id)
            .await?
            .ok_or(PaymentError::AccountNotFound(query.member_id))?;

        let today = self.clock.now().date();
        let totals = PaymentTotals::compute(&account.history, &account.pending_dues, today);

        let history: Vec<PaymentRecord> = query
            .filter
            .apply(&account.history, today, self.recent_window_days)
            .into_iter()
            .cloned()
            .collect();

        debug!(
            member_id = %query.member_id,
            matched = history.len(),
            total = account.history.len(),
            "payment search"
        );

        Ok(PaymentsView {
            today,
            history_total_count: account.history.len(),
            history,
            pending_dues: account
                .pending_dues
                .into_iter()
                .map(|due| PendingDueView::resolve(due, today))
                .collect(),
            totals,
        })
    }
}
