//! Demo dataset used to seed the in-memory adapters.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::equipment::Equipment;
use crate::domain::foundation::MemberId;
use crate::domain::membership::MembershipRecord;
use crate::ports::PaymentAccount;

/// Member the demo dataset is built around.
pub const DEMO_MEMBER_UUID: Uuid = Uuid::from_u128(0x6f1c2a3e_8b4d_4e5f_9a7b_1c2d3e4f5a6b);

const DEMO_DATA_JSON: &str = include_str!("demo_data.json");

/// Snapshot of every record the portal reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoData {
    pub memberships: Vec<MembershipRecord>,
    pub payment_accounts: Vec<MemberPaymentAccount>,
    pub equipment: Vec<Equipment>,
}

/// A billing account keyed by its owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberPaymentAccount {
    pub member_id: MemberId,
    #[serde(flatten)]
    pub account: PaymentAccount,
}

impl DemoData {
    /// Parses the bundled dataset.
    pub fn load() -> Result<Self, serde_json::Error> {
        Self::from_json(DEMO_DATA_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn demo_member_id() -> MemberId {
        MemberId::from_uuid(DEMO_MEMBER_UUID)
    }
}
