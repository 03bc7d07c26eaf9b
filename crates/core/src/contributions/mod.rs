//! Contributions module - ledger entries applied to goals and the
//! default-note rules for them.

mod contribution_notes;
mod contributions_model;

pub use contribution_notes::{default_note_kind, ContributionNoteKind};
pub use contributions_model::{Contribution, NewContribution};
