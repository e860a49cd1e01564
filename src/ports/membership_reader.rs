//! Membership reader port.
//!
//! Read-only access to membership records owned by the account service.
//!
//! # Example
//!
//! ```ignore
//! async fn days_left(reader: &dyn MembershipReader, member: &MemberId) -> Option<i64> {
//!     let record = reader.get_by_member(member).await.ok()??;
//!     Some(MembershipStateCalculator::days_remaining_now(&record.plan))
//! }
//! ```

use crate::domain::foundation::{DomainError, MemberId};
use crate::domain::membership::MembershipRecord;
use async_trait::async_trait;

/// Reader port for membership records.
#[async_trait]
pub trait MembershipReader: Send + Sync {
    /// Get the membership record for a member.
    ///
    /// Returns `None` if the member has no membership.
    async fn get_by_member(
        &self,
        member_id: &MemberId,
    ) -> Result<Option<MembershipRecord>, DomainError>;
}
