//! Adapters - Implementations of port interfaces.
//!
//! - `clock` - System and fixed clocks
//! - `memory` - In-memory readers seeded from a demo dataset

pub mod clock;
pub mod memory;

pub use clock::{FixedClock, SystemClock};
pub use memory::{
    DemoData, InMemoryEquipmentCatalog, InMemoryMembershipReader, InMemoryPaymentReader,
    InMemoryPortal,
};
