use log::{debug, error, warn};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use nextgoal_core::goals::{Goal, GoalRepositoryTrait};
use nextgoal_core::settings::Settings;
use nextgoal_core::Result;

use crate::errors::StorageError;
use crate::fs::atomic_write;

/// File name of the goals document inside the data directory.
pub const GOALS_FILE_NAME: &str = "goals.json";

/// Stores the goal collection as one pretty-printed JSON array.
pub struct JsonGoalRepository {
    path: PathBuf,
}

impl JsonGoalRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonGoalRepository { path: path.into() }
    }

    /// Repository for `goals.json` inside `data_dir`.
    pub fn in_dir(data_dir: impl AsRef<Path>) -> Self {
        Self::new(data_dir.as_ref().join(GOALS_FILE_NAME))
    }

    /// Repository for the data directory configured in `settings`.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::in_dir(&settings.data_dir)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored goals. A missing file is an empty collection.
    pub fn read_goals(&self) -> Result<Vec<Goal>> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StorageError::from(e).into()),
        };
        let goals: Vec<Goal> = serde_json::from_slice(&bytes).map_err(StorageError::from)?;
        Ok(goals)
    }

    /// Replaces the stored document with `goals`.
    pub fn write_goals(&self, goals: &[Goal]) -> Result<()> {
        let json = serde_json::to_vec_pretty(goals).map_err(StorageError::from)?;
        atomic_write(&self.path, &json)?;
        Ok(())
    }
}

impl GoalRepositoryTrait for JsonGoalRepository {
    fn load_all(&self) -> Vec<Goal> {
        match self.read_goals() {
            Ok(goals) => goals,
            Err(e) => {
                warn!(
                    "Could not load goals from {}: {}. Starting with an empty list.",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    fn save_all(&self, goals: &[Goal]) {
        match self.write_goals(goals) {
            Ok(()) => debug!("Saved {} goals to {}", goals.len(), self.path.display()),
            Err(e) => error!("Failed to save goals to {}: {}", self.path.display(), e),
        }
    }
}
