//! Password strength feedback shown on the sign-up form.
//!
//! This is display guidance only. It does not gate account creation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum length before character classes are considered.
pub const MIN_PASSWORD_LENGTH: usize = 8;

const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    /// Grades a password, or returns `None` for an empty one.
    ///
    /// Shorter than [`MIN_PASSWORD_LENGTH`] is weak. Otherwise the grade is
    /// the number of classes present among lowercase, uppercase, digits and
    /// specials: two or fewer is medium, three or four is strong.
    pub fn classify(password: &str) -> Option<Self> {
        if password.is_empty() {
            return None;
        }
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Some(PasswordStrength::Weak);
        }

        let classes = [
            password.chars().any(|c| c.is_ascii_lowercase()),
            password.chars().any(|c| c.is_ascii_uppercase()),
            password.chars().any(|c| c.is_ascii_digit()),
            password.chars().any(|c| SPECIAL_CHARS.contains(c)),
        ]
        .iter()
        .filter(|present| **present)
        .count();

        if classes <= 2 {
            Some(PasswordStrength::Medium)
        } else {
            Some(PasswordStrength::Strong)
        }
    }

    /// Width of the strength meter in percent.
    pub fn meter_width(&self) -> u8 {
        match self {
            PasswordStrength::Weak => 33,
            PasswordStrength::Medium => 66,
            PasswordStrength::Strong => 100,
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            PasswordStrength::Weak => "Weak - Use at least 8 characters",
            PasswordStrength::Medium => "Medium - Add uppercase, numbers or special characters",
            PasswordStrength::Strong => "Strong password",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PasswordStrength::Weak => "weak",
            PasswordStrength::Medium => "medium",
            PasswordStrength::Strong => "strong",
        };
        write!(f, "{}", s)
    }
}

/// Meter width for an optional grade; an empty password shows an empty bar.
pub fn meter_width(strength: Option<PasswordStrength>) -> u8 {
    strength.map(|s| s.meter_width()).unwrap_or(0)
}

/// Confirmation check for the sign-up form. An empty confirmation never matches.
pub fn passwords_match(password: &str, confirmation: &str) -> bool {
    !confirmation.is_empty() && password == confirmation
}
