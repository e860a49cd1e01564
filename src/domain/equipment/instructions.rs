//! Splits numbered instruction text into steps.

use once_cell::sync::Lazy;
use regex::Regex;

/// Step marker: a run of ASCII digits, a period, and one whitespace character.
static STEP_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+\.\s").unwrap());

/// Splits "1. Adjust the seat. 2. Select your weight." into
/// `["Adjust the seat.", "Select your weight."]`.
///
/// Text between markers is trimmed and empty pieces are dropped. Digits
/// followed by anything else ("2.5 kg", "10 reps") stay in the step.
pub fn instruction_steps(text: &str) -> Vec<String> {
    STEP_MARKER
        .split(text)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}
