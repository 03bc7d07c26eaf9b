//! Planner settings and their environment overrides.

use chrono_tz::Tz;
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{is_supported_currency, DEFAULT_CURRENCY};
use crate::i18n::Locale;
use crate::utils::time_utils::DEFAULT_PLANNER_TZ;

pub const ENV_DEFAULT_CURRENCY: &str = "NEXTGOAL_DEFAULT_CURRENCY";
pub const ENV_LOCALE: &str = "NEXTGOAL_LOCALE";
pub const ENV_TIMEZONE: &str = "NEXTGOAL_TZ";
pub const ENV_DATA_DIR: &str = "NEXTGOAL_DATA_DIR";

const APP_DIR_NAME: &str = "nextgoal";

/// User-facing preferences the domain layer depends on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Currency preselected for new goals.
    pub default_currency: String,
    pub locale: Locale,
    /// Zone used for weekday and day-of-month comparisons.
    pub timezone: Tz,
    /// Directory holding the goals document.
    pub data_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_currency: DEFAULT_CURRENCY.to_string(),
            locale: Locale::default(),
            timezone: DEFAULT_PLANNER_TZ,
            data_dir: default_data_dir(),
        }
    }
}

impl Settings {
    /// Builds settings from `NEXTGOAL_*` environment variables.
    ///
    /// Absent variables keep their defaults; invalid values are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Settings::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(currency) = read(ENV_DEFAULT_CURRENCY) {
            if is_supported_currency(&currency) {
                settings.default_currency = currency.trim().to_ascii_uppercase();
            } else {
                warn!(
                    "Ignoring {}={}: unsupported currency",
                    ENV_DEFAULT_CURRENCY, currency
                );
            }
        }

        if let Some(locale) = read(ENV_LOCALE) {
            match locale.parse::<Locale>() {
                Ok(parsed) => settings.locale = parsed,
                Err(e) => warn!("Ignoring {}={}: {}", ENV_LOCALE, locale, e),
            }
        }

        if let Some(tz) = read(ENV_TIMEZONE) {
            match tz.trim().parse::<Tz>() {
                Ok(parsed) => settings.timezone = parsed,
                Err(e) => warn!("Ignoring {}={}: {}", ENV_TIMEZONE, tz, e),
            }
        }

        if let Some(dir) = read(ENV_DATA_DIR) {
            settings.data_dir = PathBuf::from(dir.trim());
        }

        settings
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from("."))
}
