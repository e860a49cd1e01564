//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `MEMBER_PORTAL` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use member_portal::config::PortalConfig;
//!
//! let config = PortalConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Warning threshold: {} days", config.membership.warning_threshold_days);
//! ```

mod clock;
mod error;
mod logging;
mod membership;
mod payments;

pub use clock::ClockConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use membership::{MembershipConfig, MAX_WARNING_THRESHOLD_DAYS};
pub use payments::{PaymentsConfig, MAX_RECENT_WINDOW_DAYS};

use serde::Deserialize;

/// Root configuration
///
/// Every section has defaults, so an empty environment yields a usable config.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PortalConfig {
    /// Membership display (expiry warning threshold)
    #[serde(default)]
    pub membership: MembershipConfig,

    /// Payments page (recent-payment window)
    #[serde(default)]
    pub payments: PaymentsConfig,

    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Optional pinned clock
    #[serde(default)]
    pub clock: ClockConfig,
}

impl PortalConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `MEMBER_PORTAL` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `MEMBER_PORTAL__MEMBERSHIP__WARNING_THRESHOLD_DAYS=7`
    /// - `MEMBER_PORTAL__PAYMENTS__RECENT_WINDOW_DAYS=30`
    /// - `MEMBER_PORTAL__LOGGING__JSON=true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("MEMBER_PORTAL")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load and validate in one step.
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first section that is out of range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.membership.validate()?;
        self.payments.validate()?;
        self.logging.validate()?;
        self.clock.validate()?;
        Ok(())
    }
}
