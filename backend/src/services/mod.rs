//! Business logic services for the Fridge Tracker Platform

pub mod analytics;
pub mod inventory;
pub mod waste;

pub use analytics::AnalyticsService;
pub use inventory::InventoryService;
pub use waste::WasteService;
