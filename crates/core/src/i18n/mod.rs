//! Localized labels and plural-aware templates.
//!
//! Only the strings the domain layer produces live here: frequency titles,
//! default contribution notes and the time-remaining phrases.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, ValidationError};

/// Interface language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Locale {
    #[serde(rename = "en")]
    English,
    #[default]
    #[serde(rename = "uk")]
    Ukrainian,
}

/// CLDR plural category for cardinal numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralCategory {
    One,
    Few,
    Many,
    Other,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Ukrainian => "uk",
        }
    }

    /// Plural category of `n` under this locale's cardinal rules.
    ///
    /// Negative counts use the rule of their absolute value.
    pub fn plural_category(&self, n: i64) -> PluralCategory {
        let n = n.unsigned_abs();
        match self {
            Locale::English => {
                if n == 1 {
                    PluralCategory::One
                } else {
                    PluralCategory::Other
                }
            }
            Locale::Ukrainian => {
                let (mod10, mod100) = (n % 10, n % 100);
                if mod10 == 1 && mod100 != 11 {
                    PluralCategory::One
                } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
                    PluralCategory::Few
                } else {
                    PluralCategory::Many
                }
            }
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = Error;

    /// Accepts bare language codes and tagged forms like `en-US` or `uk_UA.UTF-8`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let language = s
            .trim()
            .split(['-', '_', '.'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match language.as_str() {
            "en" => Ok(Locale::English),
            "uk" | "ua" => Ok(Locale::Ukrainian),
            _ => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unsupported locale '{}'",
                s
            )))),
        }
    }
}

/// Unit a remaining duration is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Days,
    Weeks,
    Months,
}

/// Renders `count` units with the locale's plural form, e.g. "3 weeks" or "5 тижнів".
pub fn format_time_count(locale: Locale, unit: TimeUnit, count: i64) -> String {
    let word = match (locale, unit, locale.plural_category(count)) {
        (Locale::English, TimeUnit::Days, PluralCategory::One) => "day",
        (Locale::English, TimeUnit::Days, _) => "days",
        (Locale::English, TimeUnit::Weeks, PluralCategory::One) => "week",
        (Locale::English, TimeUnit::Weeks, _) => "weeks",
        (Locale::English, TimeUnit::Months, PluralCategory::One) => "month",
        (Locale::English, TimeUnit::Months, _) => "months",

        (Locale::Ukrainian, TimeUnit::Days, PluralCategory::One) => "день",
        (Locale::Ukrainian, TimeUnit::Days, PluralCategory::Few) => "дні",
        (Locale::Ukrainian, TimeUnit::Days, _) => "днів",
        (Locale::Ukrainian, TimeUnit::Weeks, PluralCategory::One) => "тиждень",
        (Locale::Ukrainian, TimeUnit::Weeks, PluralCategory::Few) => "тижні",
        (Locale::Ukrainian, TimeUnit::Weeks, _) => "тижнів",
        (Locale::Ukrainian, TimeUnit::Months, PluralCategory::One) => "місяць",
        (Locale::Ukrainian, TimeUnit::Months, PluralCategory::Few) => "місяці",
        (Locale::Ukrainian, TimeUnit::Months, _) => "місяців",
    };
    format!("{} {}", count, word)
}
