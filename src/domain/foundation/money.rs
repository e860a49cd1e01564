//! Money formatting. Amounts are carried as `i64` cents, never floats.

/// Formats an amount in cents as dollars, e.g. `-2505` as `-$25.05`.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{}${}.{:02}", sign, abs / 100, abs % 100)
}
