//! HTTP handlers for the recommendation service passthrough
//!
//! The recommendation service is an opaque collaborator. Its failure must
//! never gate inventory availability, so these handlers degrade gracefully:
//! the snapshot is returned either way and the recommendation fields are
//! simply absent when the upstream call fails.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::error::AppResult;
use crate::external::RecommendationClient;
use crate::middleware::CurrentUser;
use crate::models::{
    InventorySnapshot, RecipeSuggestion, RecommendationReport, DEFAULT_EXPIRY_HORIZON_DAYS,
};
use crate::services::InventoryService;
use crate::AppState;

/// Inventory snapshot plus the upstream report, when available
#[derive(Serialize)]
pub struct RecommendationsResponse {
    #[serde(flatten)]
    pub snapshot: InventorySnapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<RecommendationReport>,
}

/// Recipe suggestions, absent when the upstream call fails
#[derive(Serialize)]
pub struct RecipeSuggestionsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipes: Option<Vec<RecipeSuggestion>>,
}

fn recommendation_client(state: &AppState) -> RecommendationClient {
    RecommendationClient::new(
        state.config.recommendation.api_endpoint.clone(),
        state.config.recommendation.api_key.clone(),
        state.config.recommendation.timeout_seconds,
    )
}

/// Get free-text recommendations for the current inventory
pub async fn get_recommendations(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> AppResult<Json<RecommendationsResponse>> {
    let snapshot = InventoryService::new(state.db.clone())
        .snapshot(current_user.0.user_id, DEFAULT_EXPIRY_HORIZON_DAYS)
        .await?;

    let recommendations = match recommendation_client(&state)
        .get_recommendations(&snapshot)
        .await
    {
        Ok(report) => Some(report),
        Err(e) => {
            tracing::warn!("Recommendation service degraded: {}", e);
            None
        }
    };

    Ok(Json(RecommendationsResponse {
        snapshot,
        recommendations,
    }))
}

/// Get recipe suggestions built from the current inventory
pub async fn suggest_recipes(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> AppResult<Json<RecipeSuggestionsResponse>> {
    let snapshot = InventoryService::new(state.db.clone())
        .snapshot(current_user.0.user_id, DEFAULT_EXPIRY_HORIZON_DAYS)
        .await?;

    let recipes = match recommendation_client(&state).suggest_recipes(&snapshot).await {
        Ok(recipes) => Some(recipes),
        Err(e) => {
            tracing::warn!("Recommendation service degraded: {}", e);
            None
        }
    };

    Ok(Json(RecipeSuggestionsResponse { recipes }))
}
