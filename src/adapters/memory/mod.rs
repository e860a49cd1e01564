//! In-memory adapters.
//!
//! Back the read ports with `tokio::sync::RwLock`-guarded maps. Seed them
//! from [`DemoData`] for local runs or build them directly in tests.

mod demo_data;
mod equipment_catalog;
mod membership_reader;
mod payment_reader;

pub use demo_data::{DemoData, MemberPaymentAccount, DEMO_MEMBER_UUID};
pub use equipment_catalog::InMemoryEquipmentCatalog;
pub use membership_reader::InMemoryMembershipReader;
pub use payment_reader::InMemoryPaymentReader;

/// All three readers seeded from one dataset.
#[derive(Debug, Clone)]
pub struct InMemoryPortal {
    pub memberships: InMemoryMembershipReader,
    pub payments: InMemoryPaymentReader,
    pub equipment: InMemoryEquipmentCatalog,
}

impl InMemoryPortal {
    pub fn seeded(data: DemoData) -> Self {
        Self {
            memberships: InMemoryMembershipReader::with_records(data.memberships),
            payments: InMemoryPaymentReader::with_accounts(
                data.payment_accounts
                    .into_iter()
                    .map(|entry| (entry.member_id, entry.account)),
            ),
            equipment: InMemoryEquipmentCatalog::with_items(data.equipment),
        }
    }
}
