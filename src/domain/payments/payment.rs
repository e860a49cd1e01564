//! Payment history records and pending dues.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::foundation::{format_cents, InvoiceId, ValidationError};

/// Settlement state of a billing document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Upcoming,
    Overdue,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "paid",
            PaymentStatus::Upcoming => "upcoming",
            PaymentStatus::Overdue => "overdue",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Upcoming => "Upcoming",
            PaymentStatus::Overdue => "Overdue",
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "paid" => Ok(PaymentStatus::Paid),
            "upcoming" => Ok(PaymentStatus::Upcoming),
            "overdue" => Ok(PaymentStatus::Overdue),
            _ => Err(ValidationError::unknown_variant("status", s)),
        }
    }
}

/// A settled or scheduled payment in the member's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub invoice_id: InvoiceId,
    pub date: NaiveDate,
    pub amount_cents: i64,
    pub description: String,
    pub status: PaymentStatus,
    /// e.g. "Credit Card (****4567)" or "PayPal".
    pub method: String,
}

impl PaymentRecord {
    pub fn amount_label(&self) -> String {
        format_cents(self.amount_cents)
    }
}

/// An amount the member still owes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingDue {
    pub id: InvoiceId,
    pub due_date: NaiveDate,
    pub amount_cents: i64,
    pub description: String,
    /// `None` until the member picks one.
    pub payment_method: Option<String>,
}

impl PendingDue {
    /// Overdue once the due date is in the past, upcoming otherwise.
    pub fn status(&self, today: NaiveDate) -> PaymentStatus {
        if self.due_date < today {
            PaymentStatus::Overdue
        } else {
            PaymentStatus::Upcoming
        }
    }

    /// Signed days until the due date. Negative when overdue.
    pub fn days_until_due(&self, today: NaiveDate) -> i64 {
        (self.due_date - today).num_days()
    }

    pub fn payment_method_label(&self) -> &str {
        self.payment_method.as_deref().unwrap_or("Not selected")
    }
}
