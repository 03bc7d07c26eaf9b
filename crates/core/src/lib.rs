//! NextGoal Core - Domain entities, services, and traits.
//!
//! This crate contains the savings-goal business logic: goal validation,
//! contribution bookkeeping and the date arithmetic behind progress
//! estimates. It is storage-agnostic and defines the repository trait that
//! the `storage-json` crate implements.

pub mod constants;
pub mod contributions;
pub mod errors;
pub mod events;
pub mod goals;
pub mod i18n;
pub mod settings;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
