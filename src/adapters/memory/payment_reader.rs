//! In-memory payment reader.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::foundation::{DomainError, ErrorCode, MemberId};
use crate::ports::{PaymentAccount, PaymentReader};

/// Billing accounts held in memory, keyed by member.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPaymentReader {
    accounts: Arc<RwLock<HashMap<MemberId, PaymentAccount>>>,
    unavailable: Arc<AtomicBool>,
}

impl InMemoryPaymentReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_accounts(accounts: impl IntoIterator<Item = (MemberId, PaymentAccount)>) -> Self {
        Self {
            accounts: Arc::new(RwLock::new(accounts.into_iter().collect())),
            unavailable: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Inserts or replaces a member's account.
    pub async fn upsert(&self, member_id: MemberId, account: PaymentAccount) {
        self.accounts.write().await.insert(member_id, account);
    }

    /// Makes every read fail as if the billing service were down.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }
}

#[async_trait]
impl PaymentReader for InMemoryPaymentReader {
    async fn get_account(
        &self,
        member_id: &MemberId,
    ) -> Result<Option<PaymentAccount>, DomainError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::new(
                ErrorCode::DataSourceUnavailable,
                "Billing store unavailable",
            )
            .with_detail("member_id", member_id.to_string()));
        }
        let account = self.accounts.read().await.get(member_id).cloned();
        debug!(member_id = %member_id, found = account.is_some(), "payment account lookup");
        Ok(account)
    }
}
