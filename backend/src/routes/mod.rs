//! Route definitions for the Fridge Tracker Platform

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{handlers, middleware::auth_middleware, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check (public)
        .route("/health", get(handlers::health_check))
        // Catalog values (public - fixed wire contract)
        .route("/catalog", get(handlers::get_catalog))
        // Protected routes - inventory items
        .nest("/items", item_routes())
        // Protected routes - waste ledger
        .nest("/waste", waste_routes())
        // Protected routes - expense analytics
        .nest("/analytics", analytics_routes())
        // Protected routes - recommendation passthrough
        .nest("/recommendations", recommendation_routes())
        .nest("/recipes", recipe_routes())
}

/// Inventory item routes (protected)
fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_items).post(handlers::create_item))
        .route("/expiring", get(handlers::list_expiring_items))
        .route("/stats", get(handlers::get_inventory_stats))
        .route(
            "/:item_id",
            get(handlers::get_item)
                .put(handlers::update_item)
                .delete(handlers::delete_item),
        )
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Waste ledger routes (protected)
fn waste_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_waste_records).post(handlers::record_waste),
        )
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Expense analytics routes (protected)
fn analytics_routes() -> Router<AppState> {
    Router::new()
        .route("/expenses", get(handlers::get_expense_analytics))
        .route("/expenses/export", get(handlers::export_expense_analytics))
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Recommendation routes (protected)
fn recommendation_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::get_recommendations))
        .route_layer(middleware::from_fn(auth_middleware))
}

/// Recipe suggestion routes (protected)
fn recipe_routes() -> Router<AppState> {
    Router::new()
        .route("/suggest", post(handlers::suggest_recipes))
        .route_layer(middleware::from_fn(auth_middleware))
}
