//! JSON file storage implementation for NextGoal.
//!
//! This crate implements the repository traits defined in `nextgoal-core`
//! on top of a single JSON document holding the whole goal collection:
//! - Whole-collection load and save
//! - Atomic replacement of the stored document
//! - Storage-specific error types converted to core errors
//!
//! ```text
//! core (domain)
//!       │
//!       ▼
//! storage-json (this crate)
//!       │
//!       ▼
//!   goals.json
//! ```

pub mod errors;
pub mod fs;
pub mod goals;

pub use errors::StorageError;
pub use goals::JsonGoalRepository;
