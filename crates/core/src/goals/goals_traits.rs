//! Goal repository and service traits.

use uuid::Uuid;

use crate::contributions::NewContribution;
use crate::errors::Result;
use crate::goals::goals_model::{Goal, GoalUpdate, NewGoal};

/// Trait defining the persistence contract for the goal collection.
///
/// The whole collection is read and written at once. Both operations degrade
/// instead of failing: storage problems are logged by the implementation and
/// never reach the caller.
pub trait GoalRepositoryTrait: Send + Sync {
    /// Loads every stored goal, in stored order.
    ///
    /// Returns an empty list when nothing has been stored yet or the stored
    /// document cannot be read.
    fn load_all(&self) -> Vec<Goal>;

    /// Replaces the stored collection with `goals`.
    fn save_all(&self, goals: &[Goal]);
}

/// Trait defining the operations the presentation layer calls.
pub trait GoalServiceTrait {
    /// All goals, newest first.
    fn get_goals(&self) -> &[Goal];

    fn get_goal(&self, goal_id: &Uuid) -> Result<&Goal>;

    /// Validates and adds a new goal at the front of the collection.
    fn create_goal(&mut self, new_goal: NewGoal) -> Result<Goal>;

    /// Rebuilds a goal from edited fields, keeping its identity and progress.
    fn update_goal(&mut self, goal_id: &Uuid, update: GoalUpdate) -> Result<Goal>;

    /// Records a contribution, filling a blank note from the goal's schedule.
    fn add_contribution(&mut self, goal_id: &Uuid, contribution: NewContribution)
        -> Result<Goal>;

    fn delete_goal(&mut self, goal_id: &Uuid) -> Result<()>;
}
