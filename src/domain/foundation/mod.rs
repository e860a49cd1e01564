//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the member portal domain.

mod errors;
mod ids;
mod money;
mod percentage;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{EquipmentId, InvoiceId, MemberId};
pub use money::format_cents;
pub use percentage::Percentage;
pub use timestamp::{Timestamp, MILLIS_PER_DAY};
