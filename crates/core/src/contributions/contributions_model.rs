//! Contribution domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::MAX_AMOUNT;
use crate::errors::{Result, ValidationError};

/// A single recorded deposit toward a goal. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contribution {
    amount: Decimal,
    date: DateTime<Utc>,
    note: Option<String>,
}

/// Input model for recording a contribution.
///
/// A missing `date` means now; a blank `note` is replaced by the goal's
/// default note when the contribution is applied.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewContribution {
    pub amount: Decimal,
    pub date: Option<DateTime<Utc>>,
    pub note: Option<String>,
}

impl NewContribution {
    pub fn new(amount: Decimal) -> Self {
        Self {
            amount,
            date: None,
            note: None,
        }
    }

    pub fn dated(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// The note, if the user actually typed one.
    pub fn explicit_note(&self) -> Option<&str> {
        self.note
            .as_deref()
            .map(str::trim)
            .filter(|note| !note.is_empty())
    }
}

impl Contribution {
    /// Creates a contribution. Fails unless `amount` is greater than zero and
    /// at most [`MAX_AMOUNT`].
    pub fn new(amount: Decimal, date: DateTime<Utc>, note: Option<String>) -> Result<Self> {
        if amount <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveAmount { field: "amount" }.into());
        }
        if amount > MAX_AMOUNT {
            return Err(ValidationError::AmountTooLarge { field: "amount" }.into());
        }
        Ok(Self { amount, date, note })
    }

    /// Creates a contribution dated now.
    pub fn now(amount: Decimal, note: Option<String>) -> Result<Self> {
        Self::new(amount, Utc::now(), note)
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }
}
