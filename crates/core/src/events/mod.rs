//! Domain events module.
//!
//! Provides goal change events and the sink trait observers implement.
//! The goal service emits one event per successful mutation to every
//! registered sink.

mod domain_event;
mod sink;

pub use domain_event::*;
pub use sink::*;
