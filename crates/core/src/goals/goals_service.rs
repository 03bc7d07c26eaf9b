use chrono::Utc;
use log::debug;
use std::sync::Arc;
use uuid::Uuid;

use crate::contributions::{Contribution, NewContribution};
use crate::errors::{Error, Result};
use crate::events::{CallbackEventSink, DomainEvent, DomainEventSink};
use crate::goals::goals_model::{Goal, GoalUpdate, NewGoal};
use crate::goals::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use crate::settings::Settings;

/// Owns the in-memory goal collection.
///
/// Every successful mutation saves the whole collection through the
/// repository and then emits one event to each registered sink.
pub struct GoalService {
    repository: Arc<dyn GoalRepositoryTrait>,
    settings: Settings,
    goals: Vec<Goal>,
    sinks: Vec<Arc<dyn DomainEventSink>>,
}

impl GoalService {
    /// Creates the service and loads the stored goals.
    pub fn new(repository: Arc<dyn GoalRepositoryTrait>, settings: Settings) -> Self {
        let goals = repository.load_all();
        debug!("Loaded {} goals", goals.len());
        GoalService {
            repository,
            settings,
            goals,
            sinks: Vec::new(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn goal_count(&self) -> usize {
        self.goals.len()
    }

    /// Registers an observer for goal change events.
    pub fn register_sink(&mut self, sink: Arc<dyn DomainEventSink>) {
        self.sinks.push(sink);
    }

    /// Registers a closure as an observer for goal change events.
    pub fn register_callback<F>(&mut self, callback: F)
    where
        F: Fn(&DomainEvent) + Send + Sync + 'static,
    {
        self.register_sink(Arc::new(CallbackEventSink::new(callback)));
    }

    fn position_of(&self, goal_id: &Uuid) -> Result<usize> {
        self.goals
            .iter()
            .position(|goal| goal.id() == *goal_id)
            .ok_or(Error::GoalNotFound(*goal_id))
    }

    fn persist_and_notify(&self, event: DomainEvent) {
        self.repository.save_all(&self.goals);
        for sink in &self.sinks {
            sink.emit(event.clone());
        }
    }
}

impl GoalServiceTrait for GoalService {
    fn get_goals(&self) -> &[Goal] {
        &self.goals
    }

    fn get_goal(&self, goal_id: &Uuid) -> Result<&Goal> {
        let index = self.position_of(goal_id)?;
        Ok(&self.goals[index])
    }

    fn create_goal(&mut self, new_goal: NewGoal) -> Result<Goal> {
        let goal = Goal::new(new_goal)?;
        debug!("Creating goal {} '{}'", goal.id(), goal.title());

        self.goals.insert(0, goal.clone());
        self.persist_and_notify(DomainEvent::goal_created(goal.id()));
        Ok(goal)
    }

    fn update_goal(&mut self, goal_id: &Uuid, update: GoalUpdate) -> Result<Goal> {
        let index = self.position_of(goal_id)?;
        let updated = self.goals[index].with_updated_fields(update)?;
        debug!("Updating goal {}", updated.id());

        self.goals[index] = updated.clone();
        self.persist_and_notify(DomainEvent::goal_updated(updated.id()));
        Ok(updated)
    }

    fn add_contribution(
        &mut self,
        goal_id: &Uuid,
        contribution: NewContribution,
    ) -> Result<Goal> {
        let index = self.position_of(goal_id)?;
        let date = contribution.date.unwrap_or_else(Utc::now);
        let note = match contribution.explicit_note() {
            Some(note) => note.to_string(),
            None => self.goals[index].default_note_for(date, &self.settings),
        };
        let entry = Contribution::new(contribution.amount, date, Some(note))?;
        debug!(
            "Adding contribution of {} to goal {}",
            entry.amount(),
            goal_id
        );

        let amount = entry.amount();
        let goal = &mut self.goals[index];
        goal.add_contribution(entry)?;
        let updated = goal.clone();

        self.persist_and_notify(DomainEvent::contribution_added(*goal_id, amount));
        Ok(updated)
    }

    fn delete_goal(&mut self, goal_id: &Uuid) -> Result<()> {
        let index = self.position_of(goal_id)?;
        let removed = self.goals.remove(index);
        debug!("Deleted goal {} '{}'", removed.id(), removed.title());

        self.persist_and_notify(DomainEvent::goal_deleted(*goal_id));
        Ok(())
    }
}
