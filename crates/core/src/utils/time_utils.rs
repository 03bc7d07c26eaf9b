use chrono::{DateTime, Days, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

/// Default timezone for calendar comparisons.
/// Weekday and day-of-month checks are made in this zone unless settings override it.
pub const DEFAULT_PLANNER_TZ: Tz = chrono_tz::Europe::Kyiv;

/// Converts a UTC instant to the calendar date observed in `tz`.
///
/// This is the single place instants become calendar dates; use it whenever a
/// rule compares weekdays or days of the month.
pub fn local_date_from_utc(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Shifts `instant` by a signed number of calendar days, keeping its
/// wall-clock time in `tz`.
///
/// When the shifted local time is skipped or repeated by a DST change, the
/// shift is made in UTC instead. Returns `None` if the result falls outside
/// chrono's representable range.
pub fn shift_by_days(instant: DateTime<Utc>, days: i64, tz: Tz) -> Option<DateTime<Utc>> {
    shift_local(instant.with_timezone(&tz), days)
        .map(|shifted| shifted.with_timezone(&Utc))
        .or_else(|| shift_local(instant, days))
}

fn shift_local<T: TimeZone>(instant: DateTime<T>, days: i64) -> Option<DateTime<T>> {
    let magnitude = Days::new(days.unsigned_abs());
    if days >= 0 {
        instant.checked_add_days(magnitude)
    } else {
        instant.checked_sub_days(magnitude)
    }
}
