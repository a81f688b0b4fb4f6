//! Display formatting for weights and scores.
//!
//! Formatting is for reports only; computed values keep full precision.

/// Decimal places used for weights and consistency figures.
pub const DEFAULT_DECIMAL_PLACES: usize = 4;

/// Decimal places used for percentage scores.
pub const DEFAULT_PERCENTAGE_PLACES: usize = 2;

/// Formats `value` with a fixed number of decimals (`0.6479`).
pub fn format_decimal(value: f64, decimal_places: usize) -> String {
    format!("{:.*}", decimal_places, value)
}

/// Formats a fraction as a percentage (`0.6667` -> `66.67%`).
pub fn format_percentage(value: f64, decimal_places: usize) -> String {
    format!("{:.*}%", decimal_places, value * 100.0)
}
