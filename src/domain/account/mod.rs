//! Account domain module.
//!
//! Sign-up form feedback. Authentication itself lives outside this crate.

mod password;

pub use password::{meter_width, passwords_match, PasswordStrength, MIN_PASSWORD_LENGTH};
