//! Search and filter for the payment history list.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

use super::{PaymentRecord, PaymentStatus};

/// Days before today that still count as "recent" ("Last 30 Days" on the date dropdown).
pub const DEFAULT_RECENT_WINDOW_DAYS: u32 = 30;

/// Status dropdown on the history tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "status")]
pub enum StatusFilter {
    #[default]
    All,
    Only(PaymentStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: PaymentStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        s.parse().map(StatusFilter::Only)
    }
}

/// Date dropdown on the history tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateFilter {
    #[default]
    All,
    /// Dated no more than the recent window before today (future dates included).
    Recent,
    /// Dated before the recent window.
    Older,
}

impl DateFilter {
    pub fn matches(&self, date: NaiveDate, today: NaiveDate, recent_window_days: u32) -> bool {
        let is_recent = (today - date).num_days() <= i64::from(recent_window_days);
        match self {
            DateFilter::All => true,
            DateFilter::Recent => is_recent,
            DateFilter::Older => !is_recent,
        }
    }
}

impl FromStr for DateFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(DateFilter::All),
            "recent" => Ok(DateFilter::Recent),
            "older" => Ok(DateFilter::Older),
            _ => Err(ValidationError::unknown_variant("date_filter", s)),
        }
    }
}

/// Combined search box and dropdown state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaymentFilter {
    /// Case-insensitive substring of description or invoice id.
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub status: StatusFilter,
    #[serde(default)]
    pub date: DateFilter,
}

impl PaymentFilter {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn with_date(mut self, date: DateFilter) -> Self {
        self.date = date;
        self
    }

    fn matches_search(&self, payment: &PaymentRecord) -> bool {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        payment.description.to_lowercase().contains(&needle)
            || payment.invoice_id.as_str().to_lowercase().contains(&needle)
    }

    /// Returns true if the payment passes search, status and date filters.
    pub fn matches(&self, payment: &PaymentRecord, today: NaiveDate, recent_window_days: u32) -> bool {
        self.matches_search(payment)
            && self.status.matches(payment.status)
            && self.date.matches(payment.date, today, recent_window_days)
    }

    /// Filters `payments`, keeping their order.
    pub fn apply<'a>(
        &self,
        payments: &'a [PaymentRecord],
        today: NaiveDate,
        recent_window_days: u32,
    ) -> Vec<&'a PaymentRecord> {
        payments
            .iter()
            .filter(|p| self.matches(p, today, recent_window_days))
            .collect()
    }
}
