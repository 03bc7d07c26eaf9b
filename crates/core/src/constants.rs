use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Currency preselected for new goals when settings do not override it.
pub const DEFAULT_CURRENCY: &str = "UAH";

/// Currencies offered by the goal editor.
pub const SUPPORTED_CURRENCIES: [&str; 3] = ["UAH", "USD", "EUR"];

pub const DAYS_PER_WEEK: Decimal = dec!(7);

/// Average month length, 365.25 / 12, accounting for leap years.
pub const AVERAGE_DAYS_PER_MONTH: Decimal = dec!(30.4375);

/// Largest amount accepted for a target, a planned contribution or a deposit.
pub const MAX_AMOUNT: Decimal = dec!(1000000000000);

/// Returns true if the code is one of [`SUPPORTED_CURRENCIES`] (case-insensitive).
pub fn is_supported_currency(code: &str) -> bool {
    let code = code.trim();
    SUPPORTED_CURRENCIES
        .iter()
        .any(|supported| supported.eq_ignore_ascii_case(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_month_matches_julian_year() {
        assert_eq!(AVERAGE_DAYS_PER_MONTH, dec!(365.25) / dec!(12));
    }

    #[test]
    fn test_is_supported_currency() {
        assert!(is_supported_currency("UAH"));
        assert!(is_supported_currency(" usd "));
        assert!(!is_supported_currency("GBP"));
        assert!(!is_supported_currency(""));
    }
}
