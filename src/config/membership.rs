//! Membership display configuration

use serde::Deserialize;

use crate::domain::membership::DEFAULT_WARNING_THRESHOLD_DAYS;

use super::error::ValidationError;

/// Longest warning threshold accepted, in days.
pub const MAX_WARNING_THRESHOLD_DAYS: u32 = 365;

/// Membership configuration
#[derive(Debug, Clone, Deserialize)]
pub struct MembershipConfig {
    /// Days before plan end at which the plan shows as expiring
    #[serde(default = "default_warning_threshold_days")]
    pub warning_threshold_days: u32,
}

impl MembershipConfig {
    /// Validate membership configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.warning_threshold_days > MAX_WARNING_THRESHOLD_DAYS {
            return Err(ValidationError::WarningThresholdTooLarge {
                max: MAX_WARNING_THRESHOLD_DAYS,
                actual: self.warning_threshold_days,
            });
        }
        Ok(())
    }
}

impl Default for MembershipConfig {
    fn default() -> Self {
        Self {
            warning_threshold_days: default_warning_threshold_days(),
        }
    }
}

fn default_warning_threshold_days() -> u32 {
    DEFAULT_WARNING_THRESHOLD_DAYS
}
