//! JSON storage implementation for goals.

mod repository;

pub use repository::{JsonGoalRepository, GOALS_FILE_NAME};
