//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `membership` - Plan window, usage allowances, expiry classification
//! - `payments` - Payment history, pending dues, filters and totals
//! - `equipment` - Equipment guide entries and usage instructions
//! - `account` - Sign-up password feedback

pub mod account;
pub mod equipment;
pub mod foundation;
pub mod membership;
pub mod payments;
