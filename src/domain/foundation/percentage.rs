//! Percentage value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A value between 0 and 100 inclusive, with fractional precision.
///
/// Used for progress-bar widths, so it can never leave the closed range.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(f64);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0.0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100.0);

    /// Creates a Percentage, clamping to the valid range.
    ///
    /// NaN maps to zero.
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 100.0))
    }

    /// Returns the raw value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the value rounded half away from zero, for "93% complete" labels.
    pub fn rounded(&self) -> u8 {
        self.0.round() as u8
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.rounded())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_keeps_in_range_values() {
        assert_eq!(Percentage::clamped(0.0).value(), 0.0);
        assert_eq!(Percentage::clamped(42.5).value(), 42.5);
        assert_eq!(Percentage::clamped(100.0).value(), 100.0);
    }

    #[test]
    fn clamped_pins_out_of_range_values() {
        assert_eq!(Percentage::clamped(-12.0), Percentage::ZERO);
        assert_eq!(Percentage::clamped(250.0), Percentage::HUNDRED);
        assert_eq!(Percentage::clamped(f64::INFINITY), Percentage::HUNDRED);
        assert_eq!(Percentage::clamped(f64::NEG_INFINITY), Percentage::ZERO);
    }

    #[test]
    fn clamped_maps_nan_to_zero() {
        assert_eq!(Percentage::clamped(f64::NAN), Percentage::ZERO);
    }

    #[test]
    fn rounded_matches_progress_label() {
        assert_eq!(Percentage::clamped(93.33).rounded(), 93);
        assert_eq!(Percentage::clamped(66.5).rounded(), 67);
    }

    #[test]
    fn percentage_displays_rounded() {
        assert_eq!(format!("{}", Percentage::clamped(74.6)), "75%");
        assert_eq!(format!("{}", Percentage::ZERO), "0%");
    }

    #[test]
    fn percentage_serializes_to_json_number() {
        let json = serde_json::to_string(&Percentage::clamped(42.5)).unwrap();
        assert_eq!(json, "42.5");
    }

    #[test]
    fn percentage_default_is_zero() {
        assert_eq!(Percentage::default(), Percentage::ZERO);
    }
}
