//! HTTP handlers for the waste ledger endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::CurrentUser;
use crate::models::WasteRecord;
use crate::services::waste::{RecordWasteInput, WasteService};
use crate::AppState;
use shared::types::DateRange;

/// Optional date window for listing waste records
#[derive(Debug, Deserialize)]
pub struct WasteListQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl WasteListQuery {
    fn window(&self) -> AppResult<Option<DateRange>> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Ok(Some(DateRange { start, end })),
            (None, None) => Ok(None),
            _ => Err(AppError::validation(
                "start_date",
                "start_date and end_date must be provided together",
            )),
        }
    }
}

/// Append a record to the waste ledger
pub async fn record_waste(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Json(input): Json<RecordWasteInput>,
) -> AppResult<Json<WasteRecord>> {
    let service = WasteService::new(state.db);
    let record = service.record_waste(current_user.0.user_id, input).await?;
    Ok(Json(record))
}

/// List waste records, optionally limited to a date window
pub async fn list_waste_records(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Query(query): Query<WasteListQuery>,
) -> AppResult<Json<Vec<WasteRecord>>> {
    let service = WasteService::new(state.db);
    let records = service
        .list_records(current_user.0.user_id, query.window()?)
        .await?;
    Ok(Json(records))
}
