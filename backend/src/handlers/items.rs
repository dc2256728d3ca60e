//! HTTP handlers for inventory item endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::models::{InventoryStats, ItemWithStatus, DEFAULT_EXPIRY_HORIZON_DAYS};
use crate::services::inventory::{CreateItemInput, InventoryService, UpdateItemInput};
use crate::AppState;

/// Query parameters for expiry-horizon based endpoints
#[derive(Debug, Deserialize)]
pub struct ExpiryHorizonQuery {
    pub within_days: Option<i64>,
}

impl ExpiryHorizonQuery {
    fn horizon(&self) -> i64 {
        self.within_days.unwrap_or(DEFAULT_EXPIRY_HORIZON_DAYS)
    }
}

/// Add an item to the inventory
pub async fn create_item(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(input): Json<CreateItemInput>,
) -> AppResult<Json<ItemWithStatus>> {
    let service = InventoryService::new(state.db);
    let item = service.create_item(current_user.0.user_id, input).await?;
    Ok(Json(ItemWithStatus::derive(item, Utc::now())))
}

/// List all items with derived expiry and value fields
pub async fn list_items(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> AppResult<Json<Vec<ItemWithStatus>>> {
    let service = InventoryService::new(state.db);
    let items = service.list_items(current_user.0.user_id).await?;

    let now = Utc::now();
    let items = items
        .into_iter()
        .map(|item| ItemWithStatus::derive(item, now))
        .collect();
    Ok(Json(items))
}

/// Get a single item
pub async fn get_item(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(item_id): Path<Uuid>,
) -> AppResult<Json<ItemWithStatus>> {
    let service = InventoryService::new(state.db);
    let item = service.get_item(current_user.0.user_id, item_id).await?;
    Ok(Json(ItemWithStatus::derive(item, Utc::now())))
}

/// Partially update an item
pub async fn update_item(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(item_id): Path<Uuid>,
    Json(input): Json<UpdateItemInput>,
) -> AppResult<Json<ItemWithStatus>> {
    let service = InventoryService::new(state.db);
    let item = service
        .update_item(current_user.0.user_id, item_id, input)
        .await?;
    Ok(Json(ItemWithStatus::derive(item, Utc::now())))
}

/// Delete an item
pub async fn delete_item(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(item_id): Path<Uuid>,
) -> AppResult<Json<()>> {
    let service = InventoryService::new(state.db);
    service
        .delete_item(current_user.0.user_id, item_id)
        .await?;
    Ok(Json(()))
}

/// List items expiring within the horizon (default 3 days)
pub async fn list_expiring_items(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Query(query): Query<ExpiryHorizonQuery>,
) -> AppResult<Json<Vec<ItemWithStatus>>> {
    let service = InventoryService::new(state.db);
    let items = service
        .expiring_items(current_user.0.user_id, query.horizon())
        .await?;
    Ok(Json(items))
}

/// Get inventory statistics
pub async fn get_inventory_stats(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Query(query): Query<ExpiryHorizonQuery>,
) -> AppResult<Json<InventoryStats>> {
    let service = InventoryService::new(state.db);
    let stats = service
        .get_stats(current_user.0.user_id, query.horizon())
        .await?;
    Ok(Json(stats))
}
