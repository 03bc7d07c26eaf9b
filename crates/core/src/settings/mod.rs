//! Settings module - user preferences passed explicitly to services.

mod settings_model;

pub use settings_model::*;
