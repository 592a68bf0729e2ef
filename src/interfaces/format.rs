//! Display rounding. Amounts coming out of the engine are full precision;
//! they are only rounded here, on their way to a human.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount to two fractional digits, half away from zero.
///
/// Returns `None` when the value is outside what `Decimal` can represent.
pub fn round_currency(value: f64) -> Option<Decimal> {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

/// Formats an amount with exactly two fractional digits.
pub fn to_currency(value: f64) -> String {
    match round_currency(value) {
        Some(amount) => format!("{amount:.2}"),
        None => format!("{value:.2}"),
    }
}

/// Formats a fraction (0.25) as a percentage ("25.00%").
pub fn to_percent(fraction: f64) -> String {
    format!("{}%", to_currency(fraction * 100.0))
}
