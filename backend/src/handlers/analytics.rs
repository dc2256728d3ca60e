//! HTTP handlers for expense analytics endpoints

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Json,
};

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::models::{ExpenseAnalyticsReport, WasteValuationPolicy};
use crate::services::analytics::{AnalyticsFilter, AnalyticsService};
use crate::AppState;

fn analytics_service(state: &AppState) -> AnalyticsService {
    let policy = WasteValuationPolicy::parse(&state.config.analytics.waste_valuation_policy)
        .unwrap_or_default();
    AnalyticsService::new(state.db.clone()).with_policy(policy)
}

/// Get the expense analytics report for the requested window
pub async fn get_expense_analytics(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Query(filter): Query<AnalyticsFilter>,
) -> AppResult<Json<ExpenseAnalyticsReport>> {
    let service = analytics_service(&state);
    let report = service
        .get_expense_report(current_user.0.user_id, &filter)
        .await?;
    Ok(Json(report))
}

/// Export the category breakdown of the report as a CSV attachment
pub async fn export_expense_analytics(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Query(filter): Query<AnalyticsFilter>,
) -> AppResult<impl IntoResponse> {
    let service = analytics_service(&state);
    let csv_data = service
        .export_category_breakdown_csv(current_user.0.user_id, &filter)
        .await?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"expense-analytics.csv\"",
            ),
        ],
        csv_data,
    ))
}
