//! Clock port.
//!
//! Every "now"-dependent calculation in the handlers reads time through this
//! port so tests can pin the instant.

use crate::domain::foundation::Timestamp;

/// Source of the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}
