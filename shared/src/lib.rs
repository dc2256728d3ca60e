//! Shared types and models for the Fridge Tracker Platform
//!
//! This crate contains types shared between the backend, frontend (via WASM),
//! and other components of the system, along with the pure functions that
//! derive expiry state, item value, inventory statistics, and expense
//! analytics from stored records.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
