//! Recommendation service client
//!
//! Client for the remote recommendation microservice. The platform sends it
//! a read-only inventory snapshot and passes its free-text suggestions,
//! alerts, and generated recipes through unchanged. Callers are expected to
//! degrade gracefully: a failure here must never gate inventory or analytics
//! responses.

use reqwest::Client;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::models::{InventorySnapshot, RecipeSuggestion, RecommendationReport};

/// Client for the recommendation microservice
#[derive(Clone)]
pub struct RecommendationClient {
    api_endpoint: String,
    api_key: String,
    http_client: Client,
}

/// Response envelope for recipe suggestions
#[derive(Debug, Deserialize)]
struct RecipesResponse {
    #[serde(default)]
    recipes: Vec<RecipeSuggestion>,
}

impl RecommendationClient {
    /// Create a new recommendation client
    pub fn new(api_endpoint: String, api_key: String, timeout_seconds: u64) -> Self {
        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            api_endpoint,
            api_key,
            http_client,
        }
    }

    /// Send the inventory snapshot and fetch free-text recommendations
    pub async fn get_recommendations(
        &self,
        snapshot: &InventorySnapshot,
    ) -> AppResult<RecommendationReport> {
        let url = format!("{}/recommendations", self.api_endpoint);

        let response = self
            .http_client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .json(snapshot)
            .send()
            .await
            .map_err(|e| AppError::RecommendationService(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::RecommendationService(format!(
                "API returned {}: {}",
                status, body
            )));
        }

        let report: RecommendationReport = response
            .json()
            .await
            .map_err(|e| AppError::RecommendationService(format!("Failed to parse response: {}", e)))?;

        Ok(report)
    }

    /// Send the inventory snapshot and fetch generated recipes
    pub async fn suggest_recipes(
        &self,
        snapshot: &InventorySnapshot,
    ) -> AppResult<Vec<RecipeSuggestion>> {
        let url = format!("{}/recipes", self.api_endpoint);

        let response = self
            .http_client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .json(snapshot)
            .send()
            .await
            .map_err(|e| AppError::RecommendationService(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::RecommendationService(format!(
                "API returned {}: {}",
                status, body
            )));
        }

        let recipes: RecipesResponse = response
            .json()
            .await
            .map_err(|e| AppError::RecommendationService(format!("Failed to parse response: {}", e)))?;

        Ok(recipes.recipes)
    }
}
