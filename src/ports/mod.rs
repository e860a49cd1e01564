//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `Clock` - Current instant for countdowns and date filters
//! - `MembershipReader` - Membership records from the account service
//! - `PaymentReader` - Payment history and pending dues
//! - `EquipmentCatalog` - Equipment guide entries

mod clock;
mod equipment_catalog;
mod membership_reader;
mod payment_reader;

pub use clock::Clock;
pub use equipment_catalog::EquipmentCatalog;
pub use membership_reader::MembershipReader;
pub use payment_reader::{PaymentAccount, PaymentReader};
