use rust_decimal::Decimal;
use std::str::FromStr;

use crate::errors::{Result, ValidationError};

/// Parses an amount typed by a user.
///
/// Accepts a comma as the decimal separator ("12,50") and ignores spaces
/// used as thousands separators ("1 250").
pub fn parse_user_amount(input: &str) -> Result<Decimal> {
    let normalized: String = input
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if normalized.is_empty() {
        return Err(ValidationError::InvalidInput("Amount is empty".to_string()).into());
    }
    Ok(Decimal::from_str(&normalized)?)
}
