//! Amount input shaping and parsing at the write boundary.

use crate::domain::expense::MAX_AMOUNT;
use crate::errors::{ExpenseError, Result};

/// Decimal places kept when shaping amount input.
const DECIMAL_PLACES: usize = 2;

/// Cuts excess decimal digits from a raw amount string without rounding.
///
/// Runs while input is being typed, so it is idempotent: applying it to an
/// already shaped string returns the input unchanged.
pub fn shape_amount_input(raw: &str) -> String {
    match raw.split_once('.') {
        Some((whole, decimals)) if decimals.chars().count() > DECIMAL_PLACES => {
            let kept: String = decimals.chars().take(DECIMAL_PLACES).collect();
            format!("{whole}.{kept}")
        }
        _ => raw.to_string(),
    }
}

/// Parses a shaped amount string into a validated positive amount.
pub fn parse_amount(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| ExpenseError::InvalidAmount(trimmed.to_string()))?;
    if value > 0.0 && value <= MAX_AMOUNT {
        Ok(value)
    } else {
        Err(ExpenseError::InvalidAmount(trimmed.to_string()))
    }
}
