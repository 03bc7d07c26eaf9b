//! Domain event types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Domain events emitted by the goal service after successful mutations.
///
/// Each event names the goal it concerns; observers re-read the goal from
/// the service to render derived fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// A goal was created and added to the collection.
    GoalCreated { goal_id: Uuid },

    /// A goal was rebuilt from edited fields.
    GoalUpdated { goal_id: Uuid },

    /// A contribution was applied to a goal.
    ContributionAdded { goal_id: Uuid, amount: Decimal },

    /// A goal was removed from the collection.
    GoalDeleted { goal_id: Uuid },
}

impl DomainEvent {
    /// Creates a GoalCreated event.
    pub fn goal_created(goal_id: Uuid) -> Self {
        Self::GoalCreated { goal_id }
    }

    /// Creates a GoalUpdated event.
    pub fn goal_updated(goal_id: Uuid) -> Self {
        Self::GoalUpdated { goal_id }
    }

    /// Creates a ContributionAdded event.
    pub fn contribution_added(goal_id: Uuid, amount: Decimal) -> Self {
        Self::ContributionAdded { goal_id, amount }
    }

    /// Creates a GoalDeleted event.
    pub fn goal_deleted(goal_id: Uuid) -> Self {
        Self::GoalDeleted { goal_id }
    }

    /// Id of the goal this event concerns.
    pub fn goal_id(&self) -> Uuid {
        match self {
            Self::GoalCreated { goal_id }
            | Self::GoalUpdated { goal_id }
            | Self::ContributionAdded { goal_id, .. }
            | Self::GoalDeleted { goal_id } => *goal_id,
        }
    }
}
