//! Member Portal - derived membership state for a gym member portal.
//!
//! Turns raw membership, billing and equipment records into the numbers
//! and labels the portal pages display: plan progress, days remaining,
//! expiry status, usage bars, filtered payment history and equipment cards.
//!
//! # Architecture
//!
//! - `domain` - Pure value objects and calculators
//! - `ports` - Async reader traits and the clock
//! - `adapters` - In-memory readers and clock implementations
//! - `application` - Query handlers producing page view models
//! - `config` - Environment-driven configuration
//! - `telemetry` - Tracing subscriber setup

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
