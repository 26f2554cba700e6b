//! Formatting utilities used for CLI and export outputs.
//!
//! Values are kept at full precision everywhere else; rounding happens here
//! and only for display.

/// Hours with two decimals.
pub fn fmt_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}

/// Money with no decimals.
pub fn fmt_money(amount: f64) -> String {
    format!("{:.0}", amount)
}

/// Money with the configured currency symbol, e.g. `NT$ 1400`.
pub fn fmt_currency(symbol: &str, amount: f64) -> String {
    if symbol.is_empty() {
        fmt_money(amount)
    } else {
        format!("{} {}", symbol, fmt_money(amount))
    }
}
