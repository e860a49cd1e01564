//! Payments domain module.
//!
//! Payment history, pending dues, and the search/filter state of the
//! payments page.

mod errors;
mod filter;
mod payment;
mod totals;

pub use errors::PaymentError;
pub use filter::{DateFilter, PaymentFilter, StatusFilter, DEFAULT_RECENT_WINDOW_DAYS};
pub use payment::{PaymentRecord, PaymentStatus, PendingDue};
pub use totals::PaymentTotals;
