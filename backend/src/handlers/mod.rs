//! HTTP handlers for the Fridge Tracker Platform

pub mod analytics;
pub mod catalog;
pub mod health;
pub mod items;
pub mod recommendations;
pub mod waste;

pub use analytics::*;
pub use catalog::*;
pub use health::*;
pub use items::*;
pub use recommendations::*;
pub use waste::*;
