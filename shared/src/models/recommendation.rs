//! Recommendation service payloads
//!
//! The recommendation service is an opaque collaborator: the platform sends
//! it a read-only inventory snapshot and passes its responses through
//! unchanged. Deserialization is deliberately tolerant so that upstream
//! payload drift never breaks inventory or analytics availability.

use serde::{Deserialize, Serialize};

use super::{InventoryStats, ItemWithStatus};

/// Read-only snapshot exported to the recommendation service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventorySnapshot {
    pub items: Vec<ItemWithStatus>,
    pub stats: InventoryStats,
}

/// Free-text suggestions returned by the recommendation service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationReport {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub alerts: Vec<RecommendationAlert>,
    #[serde(default)]
    pub shopping_suggestions: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationAlert {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub urgency: String,
}

/// A generated recipe built from the snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeSuggestion {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cook_time: String,
    #[serde(default)]
    pub servings: i32,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub available_ingredients: Vec<String>,
    #[serde(default)]
    pub missing_ingredients: Vec<String>,
}
