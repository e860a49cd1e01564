//! Aggregate amounts for the payments page header.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{PaymentRecord, PaymentStatus, PendingDue};

/// Sums over history and pending dues. All amounts in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaymentTotals {
    pub total_paid_cents: i64,
    pub outstanding_cents: i64,
    pub overdue_cents: i64,
    pub pending_count: usize,
    pub overdue_count: usize,
}

impl PaymentTotals {
    pub fn compute(history: &[PaymentRecord], dues: &[PendingDue], today: NaiveDate) -> Self {
        let total_paid_cents = history
            .iter()
            .filter(|p| p.status == PaymentStatus::Paid)
            .map(|p| p.amount_cents)
            .sum();

        let overdue: Vec<_> = dues
            .iter()
            .filter(|d| d.status(today) == PaymentStatus::Overdue)
            .collect();

        Self {
            total_paid_cents,
            outstanding_cents: dues.iter().map(|d| d.amount_cents).sum(),
            overdue_cents: overdue.iter().map(|d| d.amount_cents).sum(),
            pending_count: dues.len(),
            overdue_count: overdue.len(),
        }
    }
}
