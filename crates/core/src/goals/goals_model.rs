//! Goals domain models.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{AVERAGE_DAYS_PER_MONTH, DAYS_PER_WEEK, MAX_AMOUNT};
use crate::contributions::{default_note_kind, Contribution, ContributionNoteKind};
use crate::errors::{Result, ValidationError};
use crate::i18n::{format_time_count, Locale, TimeUnit};
use crate::settings::Settings;
use crate::utils::time_utils::shift_by_days;

/// Recurrence of the planned contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContributionFrequency {
    Daily,
    Weekly,
    Monthly,
}

impl ContributionFrequency {
    pub const ALL: [ContributionFrequency; 3] = [
        ContributionFrequency::Daily,
        ContributionFrequency::Weekly,
        ContributionFrequency::Monthly,
    ];

    /// Length of one period in days (fractional for months).
    pub fn days_per_period(&self) -> Decimal {
        match self {
            ContributionFrequency::Daily => Decimal::ONE,
            ContributionFrequency::Weekly => DAYS_PER_WEEK,
            ContributionFrequency::Monthly => AVERAGE_DAYS_PER_MONTH,
        }
    }

    pub fn time_unit(&self) -> TimeUnit {
        match self {
            ContributionFrequency::Daily => TimeUnit::Days,
            ContributionFrequency::Weekly => TimeUnit::Weeks,
            ContributionFrequency::Monthly => TimeUnit::Months,
        }
    }

    pub fn localized_title(&self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::English, ContributionFrequency::Daily) => "Daily",
            (Locale::English, ContributionFrequency::Weekly) => "Weekly",
            (Locale::English, ContributionFrequency::Monthly) => "Monthly",
            (Locale::Ukrainian, ContributionFrequency::Daily) => "Щодня",
            (Locale::Ukrainian, ContributionFrequency::Weekly) => "Щотижня",
            (Locale::Ukrainian, ContributionFrequency::Monthly) => "Щомісяця",
        }
    }
}

/// Remaining time expressed in the goal's own cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRemaining {
    pub count: i64,
    pub unit: TimeUnit,
}

/// Domain model representing a savings goal.
///
/// Identity (`id`, `created_date`) is fixed at construction. Progress only
/// grows through [`Goal::add_contribution`]; edits go through
/// [`Goal::with_updated_fields`], which carries identity and progress forward.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    id: Uuid,
    title: String,
    description: Option<String>,
    currency: String,
    total_amount: Decimal,
    #[serde(default)]
    current_amount: Decimal,
    contribution_amount: Decimal,
    contribution_frequency: ContributionFrequency,
    created_date: DateTime<Utc>,
    #[serde(default)]
    contributions: Vec<Contribution>,
}

/// Input model for creating a new goal.
///
/// `id` and `created_date` may be pinned; otherwise a fresh v4 id and the
/// current time are used.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub title: String,
    pub description: Option<String>,
    pub currency: String,
    pub total_amount: Decimal,
    pub contribution_amount: Decimal,
    pub contribution_frequency: ContributionFrequency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
}

/// Input model for editing an existing goal.
///
/// Holds only the user-editable fields; identity and progress come from the
/// goal being edited.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GoalUpdate {
    pub title: String,
    pub description: Option<String>,
    pub currency: String,
    pub total_amount: Decimal,
    pub contribution_amount: Decimal,
    pub contribution_frequency: ContributionFrequency,
}

fn validate_goal_fields(
    title: &str,
    total_amount: Decimal,
    contribution_amount: Decimal,
) -> Result<()> {
    if title.trim().is_empty() {
        return Err(
            ValidationError::InvalidInput("Goal title cannot be empty".to_string()).into(),
        );
    }
    if total_amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount {
            field: "totalAmount",
        }
        .into());
    }
    if contribution_amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount {
            field: "contributionAmount",
        }
        .into());
    }
    if total_amount > MAX_AMOUNT {
        return Err(ValidationError::AmountTooLarge {
            field: "totalAmount",
        }
        .into());
    }
    if contribution_amount > MAX_AMOUNT {
        return Err(ValidationError::AmountTooLarge {
            field: "contributionAmount",
        }
        .into());
    }
    Ok(())
}

// A description left blank in the editor is stored as absent.
fn normalize_description(description: Option<String>) -> Option<String> {
    description.filter(|text| !text.trim().is_empty())
}

impl NewGoal {
    /// New goal input in the settings' default currency.
    pub fn with_defaults(
        title: impl Into<String>,
        total_amount: Decimal,
        contribution_amount: Decimal,
        contribution_frequency: ContributionFrequency,
        settings: &Settings,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: None,
            currency: settings.default_currency.clone(),
            total_amount,
            contribution_amount,
            contribution_frequency,
            created_date: None,
        }
    }

    /// Validates the new goal data.
    pub fn validate(&self) -> Result<()> {
        validate_goal_fields(&self.title, self.total_amount, self.contribution_amount)
    }
}

impl GoalUpdate {
    /// Validates the edited goal data.
    pub fn validate(&self) -> Result<()> {
        validate_goal_fields(&self.title, self.total_amount, self.contribution_amount)
    }
}

impl Goal {
    /// Builds a validated goal with no progress.
    pub fn new(new_goal: NewGoal) -> Result<Self> {
        new_goal.validate()?;
        Ok(Self {
            id: new_goal.id.unwrap_or_else(Uuid::new_v4),
            title: new_goal.title,
            description: normalize_description(new_goal.description),
            currency: new_goal.currency,
            total_amount: new_goal.total_amount,
            current_amount: Decimal::ZERO,
            contribution_amount: new_goal.contribution_amount,
            contribution_frequency: new_goal.contribution_frequency,
            created_date: new_goal.created_date.unwrap_or_else(Utc::now),
            contributions: Vec::new(),
        })
    }

    /// Rebuilds this goal from edited fields.
    ///
    /// The result keeps this goal's id, creation date, contribution history
    /// and current amount. Validation rules are the same as for [`Goal::new`].
    pub fn with_updated_fields(&self, update: GoalUpdate) -> Result<Self> {
        update.validate()?;
        Ok(Self {
            id: self.id,
            title: update.title,
            description: normalize_description(update.description),
            currency: update.currency,
            total_amount: update.total_amount,
            current_amount: self.current_amount,
            contribution_amount: update.contribution_amount,
            contribution_frequency: update.contribution_frequency,
            created_date: self.created_date,
            contributions: self.contributions.clone(),
        })
    }

    /// Appends a contribution and adds its amount to the saved total.
    ///
    /// Leaves the goal untouched if the new total would overflow.
    pub fn add_contribution(&mut self, contribution: Contribution) -> Result<()> {
        self.current_amount = self
            .current_amount
            .checked_add(contribution.amount())
            .ok_or(ValidationError::AmountTooLarge {
                field: "currentAmount",
            })?;
        self.contributions.push(contribution);
        Ok(())
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn total_amount(&self) -> Decimal {
        self.total_amount
    }

    pub fn current_amount(&self) -> Decimal {
        self.current_amount
    }

    pub fn contribution_amount(&self) -> Decimal {
        self.contribution_amount
    }

    pub fn contribution_frequency(&self) -> ContributionFrequency {
        self.contribution_frequency
    }

    pub fn created_date(&self) -> DateTime<Utc> {
        self.created_date
    }

    /// Contributions in the order they were applied.
    pub fn contributions(&self) -> &[Contribution] {
        &self.contributions
    }

    /// Contributions sorted by date, newest first.
    pub fn contributions_newest_first(&self) -> Vec<&Contribution> {
        let mut sorted: Vec<&Contribution> = self.contributions.iter().collect();
        sorted.sort_by(|a, b| b.date().cmp(&a.date()));
        sorted
    }

    /// Amount still to save. Negative once the goal is over-funded.
    pub fn remaining_amount(&self) -> Decimal {
        self.total_amount.saturating_sub(self.current_amount)
    }

    /// The planned contribution normalized to a per-day rate.
    pub fn equivalent_daily_contribution(&self) -> Decimal {
        self.contribution_amount / self.contribution_frequency.days_per_period()
    }

    /// Whole days needed to save the remaining amount at the planned rate.
    ///
    /// Returns 0 when the daily rate is not positive, even if money is still
    /// owed. Negative when the goal is over-funded. Counts beyond `i64`
    /// saturate at `i64::MAX` (or `i64::MIN`).
    pub fn days_remaining(&self) -> i64 {
        let daily = self.equivalent_daily_contribution();
        if daily <= Decimal::ZERO {
            return 0;
        }
        let remaining = self.remaining_amount();
        let saturated = if remaining.is_sign_negative() {
            i64::MIN
        } else {
            i64::MAX
        };
        // remaining * period / amount equals remaining / daily without the
        // rounding of the intermediate daily rate.
        remaining
            .checked_mul(self.contribution_frequency.days_per_period())
            .and_then(|scaled| scaled.checked_div(self.contribution_amount))
            .or_else(|| remaining.checked_div(daily))
            .and_then(|days| days.ceil().to_i64())
            .unwrap_or(saturated)
    }

    /// Share of the target already saved, as a fraction (0.25 = 25%).
    pub fn progress_percentage(&self) -> Decimal {
        if self.total_amount <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        self.current_amount
            .checked_div(self.total_amount)
            .unwrap_or(Decimal::MAX)
    }

    /// `days_remaining` converted to the goal's cadence, rounded up.
    pub fn time_remaining(&self) -> TimeRemaining {
        let days = self.days_remaining();
        let unit = self.contribution_frequency.time_unit();
        let count = match self.contribution_frequency {
            ContributionFrequency::Daily => days,
            frequency => (Decimal::from(days) / frequency.days_per_period())
                .ceil()
                .to_i64()
                .unwrap_or(0),
        };
        TimeRemaining { count, unit }
    }

    /// Remaining time as a localized phrase, e.g. "3 weeks".
    pub fn formatted_time_remaining(&self, locale: Locale) -> String {
        let remaining = self.time_remaining();
        format_time_count(locale, remaining.unit, remaining.count)
    }

    /// Creation date shifted by `days_remaining` calendar days in `tz`.
    ///
    /// Dates past chrono's range clamp to its first or last instant.
    pub fn expected_completion_date(&self, tz: Tz) -> DateTime<Utc> {
        let days = self.days_remaining();
        shift_by_days(self.created_date, days, tz).unwrap_or(if days < 0 {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        })
    }

    /// Kind of note to use for a contribution dated `selected_date` when the
    /// user left the note blank.
    pub fn default_note_kind(&self, selected_date: DateTime<Utc>, tz: Tz) -> ContributionNoteKind {
        default_note_kind(
            self.contribution_frequency,
            self.created_date,
            selected_date,
            tz,
        )
    }

    /// Localized default note for a contribution dated `selected_date`.
    pub fn default_note_for(&self, selected_date: DateTime<Utc>, settings: &Settings) -> String {
        self.default_note_kind(selected_date, settings.timezone)
            .label(settings.locale)
            .to_string()
    }
}
