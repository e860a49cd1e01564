//! In-memory membership reader.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::foundation::{DomainError, ErrorCode, MemberId};
use crate::domain::membership::MembershipRecord;
use crate::ports::MembershipReader;

/// Membership records held in memory, keyed by member.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMembershipReader {
    records: Arc<RwLock<HashMap<MemberId, MembershipRecord>>>,
    unavailable: Arc<AtomicBool>,
}

impl InMemoryMembershipReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a reader pre-populated with `records`.
    pub fn with_records(records: impl IntoIterator<Item = MembershipRecord>) -> Self {
        let map = records
            .into_iter()
            .map(|record| (record.member_id, record))
            .collect();
        Self {
            records: Arc::new(RwLock::new(map)),
            unavailable: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Inserts or replaces a record.
    pub async fn upsert(&self, record: MembershipRecord) {
        self.records.write().await.insert(record.member_id, record);
    }

    pub async fn remove(&self, member_id: &MemberId) -> Option<MembershipRecord> {
        self.records.write().await.remove(member_id)
    }

    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }

    /// Makes every read fail as if the backing service were down.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }
}

#[async_trait]
impl MembershipReader for InMemoryMembershipReader {
    async fn get_by_member(
        &self,
        member_id: &MemberId,
    ) -> Result<Option<MembershipRecord>, DomainError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::new(
                ErrorCode::DataSourceUnavailable,
                "Membership store unavailable",
            )
            .with_detail("member_id", member_id.to_string()));
        }
        let record = self.records.read().await.get(member_id).cloned();
        debug!(member_id = %member_id, found = record.is_some(), "membership lookup");
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::membership::{MembershipPlan, PlanTier};
    use chrono::NaiveDate;

    fn record(member_id: MemberId) -> MembershipRecord {
        MembershipRecord {
            member_id,
            member_name: "Alex Johnson".to_string(),
            tier: PlanTier::Basic,
            plan: MembershipPlan::parse("2025-03-15", "2025-04-14").unwrap(),
            member_since: NaiveDate::from_ymd_opt(2023, 9, 15).unwrap(),
            usage: vec![],
            notifications: vec![],
        }
    }

    #[tokio::test]
    async fn returns_stored_record() {
        let member = MemberId::new();
        let reader = InMemoryMembershipReader::with_records([record(member)]);

        let found = reader.get_by_member(&member).await.unwrap();
        assert_eq!(found.map(|r| r.member_id), Some(member));
    }

    #[tokio::test]
    async fn unknown_member_is_none() {
        let reader = InMemoryMembershipReader::new();
        assert!(reader.get_by_member(&MemberId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn upsert_replaces_and_remove_deletes() {
        let member = MemberId::new();
        let reader = InMemoryMembershipReader::new();

        reader.upsert(record(member)).await;
        let mut upgraded = record(member);
        upgraded.tier = PlanTier::Elite;
        reader.upsert(upgraded).await;

        assert_eq!(reader.count().await, 1);
        let found = reader.get_by_member(&member).await.unwrap().unwrap();
        assert_eq!(found.tier, PlanTier::Elite);

        assert!(reader.remove(&member).await.is_some());
        assert_eq!(reader.count().await, 0);
    }

    #[tokio::test]
    async fn unavailable_reader_fails() {
        let reader = InMemoryMembershipReader::new();
        reader.set_unavailable(true);

        let member_id = MemberId::new();
        let err = reader.get_by_member(&member_id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DataSourceUnavailable);
        assert_eq!(err.details.get("member_id"), Some(&member_id.to_string()));
    }
}
