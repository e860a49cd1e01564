//! Payment reader port.
//!
//! Read-only access to a member's billing account: settled history and
//! invoices still awaiting payment.

use crate::domain::foundation::{DomainError, MemberId};
use crate::domain::payments::{PaymentRecord, PendingDue};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Reader port for billing data.
#[async_trait]
pub trait PaymentReader: Send + Sync {
    /// Get the billing account for a member.
    ///
    /// Returns `None` if the member has no billing account.
    async fn get_account(&self, member_id: &MemberId)
        -> Result<Option<PaymentAccount>, DomainError>;
}

/// A member's payment history and open dues, newest history first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaymentAccount {
    pub history: Vec<PaymentRecord>,
    pub pending_dues: Vec<PendingDue>,
}
