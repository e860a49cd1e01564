//! Clock configuration

use serde::Deserialize;

use crate::domain::foundation::Timestamp;

use super::error::ValidationError;

/// Clock configuration
///
/// Leaving `fixed_now` unset reads the system clock. Setting it to an
/// RFC 3339 instant replays that moment, which is how the demo dataset is
/// meant to be viewed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClockConfig {
    pub fixed_now: Option<String>,
}

impl ClockConfig {
    /// The pinned instant, if one is configured.
    pub fn fixed_instant(&self) -> Result<Option<Timestamp>, ValidationError> {
        self.fixed_now
            .as_deref()
            .map(|value| {
                Timestamp::parse_rfc3339("clock.fixed_now", value)
                    .map_err(|_| ValidationError::InvalidFixedNow(value.to_string()))
            })
            .transpose()
    }

    /// Validate clock configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.fixed_instant().map(|_| ())
    }
}
