//! Payments page configuration

use serde::Deserialize;

use crate::domain::payments::DEFAULT_RECENT_WINDOW_DAYS;

use super::error::ValidationError;

/// Longest recent-payment window accepted, in days.
pub const MAX_RECENT_WINDOW_DAYS: u32 = 3650;

/// Payments configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentsConfig {
    /// How far back the "recent" date filter reaches
    #[serde(default = "default_recent_window_days")]
    pub recent_window_days: u32,
}

impl PaymentsConfig {
    /// Validate payments configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.recent_window_days == 0 || self.recent_window_days > MAX_RECENT_WINDOW_DAYS {
            return Err(ValidationError::InvalidRecentWindow {
                max: MAX_RECENT_WINDOW_DAYS,
                actual: self.recent_window_days,
            });
        }
        Ok(())
    }
}

impl Default for PaymentsConfig {
    fn default() -> Self {
        Self {
            recent_window_days: default_recent_window_days(),
        }
    }
}

fn default_recent_window_days() -> u32 {
    DEFAULT_RECENT_WINDOW_DAYS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_is_valid() {
        let config = PaymentsConfig::default();
        assert_eq!(config.recent_window_days, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_window_is_rejected() {
        let config = PaymentsConfig {
            recent_window_days: 0,
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidRecentWindow { actual: 0, .. })
        ));
    }

    #[test]
    fn ten_year_window_is_the_limit() {
        assert!(PaymentsConfig {
            recent_window_days: 3650
        }
        .validate()
        .is_ok());
        assert!(PaymentsConfig {
            recent_window_days: 3651
        }
        .validate()
        .is_err());
    }
}
