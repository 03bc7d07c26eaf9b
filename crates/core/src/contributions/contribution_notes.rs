use chrono::{DateTime, Datelike, Utc};
use chrono_tz::Tz;

use crate::goals::ContributionFrequency;
use crate::i18n::Locale;
use crate::utils::time_utils::local_date_from_utc;

/// Label given to a contribution recorded without a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContributionNoteKind {
    Daily,
    Weekly,
    Monthly,
    /// Paid off the goal's regular schedule.
    Extra,
}

impl ContributionNoteKind {
    pub fn label(&self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::English, ContributionNoteKind::Daily) => "Daily contribution",
            (Locale::English, ContributionNoteKind::Weekly) => "Weekly contribution",
            (Locale::English, ContributionNoteKind::Monthly) => "Monthly contribution",
            (Locale::English, ContributionNoteKind::Extra) => "Extra contribution",
            (Locale::Ukrainian, ContributionNoteKind::Daily) => "Щоденний внесок",
            (Locale::Ukrainian, ContributionNoteKind::Weekly) => "Тижневий внесок",
            (Locale::Ukrainian, ContributionNoteKind::Monthly) => "Місячний внесок",
            (Locale::Ukrainian, ContributionNoteKind::Extra) => "Додатковий внесок",
        }
    }
}

/// Decides whether a contribution dated `selected_date` falls on the goal's
/// schedule.
///
/// Weekly goals compare weekdays and monthly goals compare days of the month
/// against `created_date`, both as seen in `tz`. Any day is on schedule for a
/// daily goal.
pub fn default_note_kind(
    frequency: ContributionFrequency,
    created_date: DateTime<Utc>,
    selected_date: DateTime<Utc>,
    tz: Tz,
) -> ContributionNoteKind {
    let created = local_date_from_utc(created_date, tz);
    let selected = local_date_from_utc(selected_date, tz);

    match frequency {
        ContributionFrequency::Daily => ContributionNoteKind::Daily,
        ContributionFrequency::Weekly if created.weekday() == selected.weekday() => {
            ContributionNoteKind::Weekly
        }
        ContributionFrequency::Monthly if created.day() == selected.day() => {
            ContributionNoteKind::Monthly
        }
        _ => ContributionNoteKind::Extra,
    }
}
