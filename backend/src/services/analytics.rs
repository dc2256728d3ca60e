//! Expense analytics service
//!
//! Stateless report generation: each request snapshots the inventory and the
//! waste ledger, resolves the requested window, and hands both to the shared
//! analytics engine. Nothing is cached or incrementally maintained.

use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{compute_expense_analytics, ExpenseAnalyticsReport, WasteValuationPolicy};
use crate::services::{InventoryService, WasteService};
use shared::types::{AnalyticsPeriod, DateRange};
use shared::validation::validate_window;

/// Expense analytics service
#[derive(Clone)]
pub struct AnalyticsService {
    db: PgPool,
    policy: WasteValuationPolicy,
}

/// Report window parameters
///
/// Explicit dates override the preset; with neither, the current month is
/// reported.
#[derive(Debug, Default, Deserialize)]
pub struct AnalyticsFilter {
    pub period: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl AnalyticsService {
    /// Create a new AnalyticsService with the default waste valuation policy
    pub fn new(db: PgPool) -> Self {
        Self {
            db,
            policy: WasteValuationPolicy::default(),
        }
    }

    /// Override the waste valuation policy (configured per deployment)
    pub fn with_policy(mut self, policy: WasteValuationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Resolve a filter to a concrete half-open window
    pub fn resolve_window(filter: &AnalyticsFilter, today: NaiveDate) -> AppResult<DateRange> {
        let period = match filter.period.as_deref() {
            Some(value) => AnalyticsPeriod::parse(value)
                .ok_or_else(|| AppError::validation("period", "Unknown period"))?,
            None => AnalyticsPeriod::default(),
        };
        let preset = period.resolve(today);

        let start = filter.start_date.unwrap_or(preset.start);
        let end = filter.end_date.unwrap_or(preset.end);
        validate_window(start, end).map_err(|msg| AppError::validation("end_date", msg))?;

        Ok(DateRange { start, end })
    }

    /// Build the expense analytics report for the requested window
    ///
    /// The full inventory is fetched, not just in-window purchases: records
    /// outside the window still serve as valuation lookup targets for waste
    /// records that carry no explicit value.
    pub async fn get_expense_report(
        &self,
        user_id: Uuid,
        filter: &AnalyticsFilter,
    ) -> AppResult<ExpenseAnalyticsReport> {
        let window = Self::resolve_window(filter, Utc::now().date_naive())?;

        let items = InventoryService::new(self.db.clone())
            .list_items(user_id)
            .await?;
        let records = WasteService::new(self.db.clone())
            .list_records(user_id, Some(window))
            .await?;

        Ok(compute_expense_analytics(
            &items,
            &records,
            window,
            self.policy,
        ))
    }

    /// Export the report's category breakdown as CSV
    pub async fn export_category_breakdown_csv(
        &self,
        user_id: Uuid,
        filter: &AnalyticsFilter,
    ) -> AppResult<String> {
        let report = self.get_expense_report(user_id, filter).await?;
        Self::to_csv(&report.category_breakdown)
    }

    /// Serialize report rows as CSV
    fn to_csv<T: serde::Serialize>(data: &[T]) -> AppResult<String> {
        let mut wtr = csv::Writer::from_writer(vec![]);
        for record in data {
            wtr.serialize(record)
                .map_err(|e| AppError::Internal(format!("CSV serialization error: {}", e)))?;
        }
        let csv_data = String::from_utf8(
            wtr.into_inner()
                .map_err(|e| AppError::Internal(format!("CSV writer error: {}", e)))?,
        )
        .map_err(|e| AppError::Internal(format!("UTF-8 conversion error: {}", e)))?;
        Ok(csv_data)
    }
}
