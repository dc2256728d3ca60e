//! Database models for the Fridge Tracker Platform
//!
//! Re-exports domain models from the shared crate

pub use shared::models::*;
