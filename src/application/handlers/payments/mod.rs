//! Payment query handlers.

mod search_payments;

pub use search_payments::{
    PendingDueView, PaymentsView, SearchPaymentsHandler, SearchPaymentsQuery,
};
