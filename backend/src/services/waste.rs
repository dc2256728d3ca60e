//! Waste ledger service
//!
//! The ledger is append-only: records are created and listed, never updated
//! or deleted. Corrections are new offsetting records, so previously
//! reported analytics are never rewritten under the user.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{FoodCategory, Unit, WasteReason, WasteRecord};
use shared::types::DateRange;
use shared::validation::{validate_name, validate_price, validate_quantity, validate_window};

/// Waste ledger service scoped to the authenticated user on every call
#[derive(Clone)]
pub struct WasteService {
    db: PgPool,
}

/// Input for recording a waste entry
#[derive(Debug, Deserialize)]
pub struct RecordWasteInput {
    /// Weak back-reference to the spent inventory item, if any
    pub original_item_id: Option<Uuid>,
    pub name: String,
    pub category: String,
    pub wasted_quantity: Decimal,
    pub unit: String,
    pub waste_reason: String,
    pub wasted_value: Option<Decimal>,
    /// Defaults to today
    pub waste_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Row shape of the waste_records table
#[derive(Debug, FromRow)]
struct WasteRow {
    id: Uuid,
    user_id: Uuid,
    original_item_id: Option<Uuid>,
    name: String,
    category: String,
    wasted_quantity: Decimal,
    unit: String,
    waste_reason: String,
    wasted_value: Option<Decimal>,
    waste_date: NaiveDate,
    notes: Option<String>,
    created_at: DateTime<Utc>,
}

impl WasteRow {
    fn into_record(self) -> AppResult<WasteRecord> {
        let category = FoodCategory::parse(&self.category).ok_or_else(|| {
            AppError::Internal(format!("Unknown category in store: {}", self.category))
        })?;
        let unit = Unit::parse(&self.unit)
            .ok_or_else(|| AppError::Internal(format!("Unknown unit in store: {}", self.unit)))?;
        let waste_reason = WasteReason::parse(&self.waste_reason).ok_or_else(|| {
            AppError::Internal(format!("Unknown waste reason in store: {}", self.waste_reason))
        })?;

        Ok(WasteRecord {
            id: self.id,
            user_id: self.user_id,
            original_item_id: self.original_item_id,
            name: self.name,
            category,
            wasted_quantity: self.wasted_quantity,
            unit,
            waste_reason,
            wasted_value: self.wasted_value,
            waste_date: self.waste_date,
            notes: self.notes,
            created_at: self.created_at,
        })
    }
}

const WASTE_COLUMNS: &str = "id, user_id, original_item_id, name, category, wasted_quantity, \
     unit, waste_reason, wasted_value, waste_date, notes, created_at";

impl WasteService {
    /// Create a new WasteService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Append a waste record to the ledger
    ///
    /// `original_item_id` is stored as given; the ledger does not enforce
    /// live referential integrity, so the referenced item may already be
    /// gone.
    pub async fn record_waste(
        &self,
        user_id: Uuid,
        input: RecordWasteInput,
    ) -> AppResult<WasteRecord> {
        validate_name(&input.name).map_err(|msg| AppError::validation("name", msg))?;
        let category = FoodCategory::parse(&input.category)
            .ok_or_else(|| AppError::validation("category", "Unknown category"))?;
        let unit =
            Unit::parse(&input.unit).ok_or_else(|| AppError::validation("unit", "Unknown unit"))?;
        validate_quantity(input.wasted_quantity)
            .map_err(|msg| AppError::validation("wasted_quantity", msg))?;
        let waste_reason = WasteReason::parse(&input.waste_reason)
            .ok_or_else(|| AppError::validation("waste_reason", "Unknown waste reason"))?;
        if let Some(value) = input.wasted_value {
            validate_price(value).map_err(|msg| AppError::validation("wasted_value", msg))?;
        }
        let waste_date = input.waste_date.unwrap_or_else(|| Utc::now().date_naive());

        let query = format!(
            r#"
            INSERT INTO waste_records (
                user_id, original_item_id, name, category, wasted_quantity,
                unit, waste_reason, wasted_value, waste_date, notes
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {WASTE_COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, WasteRow>(&query)
            .bind(user_id)
            .bind(input.original_item_id)
            .bind(input.name.trim())
            .bind(category.as_str())
            .bind(input.wasted_quantity)
            .bind(unit.as_str())
            .bind(waste_reason.as_str())
            .bind(input.wasted_value)
            .bind(waste_date)
            .bind(&input.notes)
            .fetch_one(&self.db)
            .await?;

        row.into_record()
    }

    /// List the user's waste records, newest first, optionally filtered to a
    /// half-open date window
    pub async fn list_records(
        &self,
        user_id: Uuid,
        window: Option<DateRange>,
    ) -> AppResult<Vec<WasteRecord>> {
        let rows = match window {
            Some(range) => {
                validate_window(range.start, range.end)
                    .map_err(|msg| AppError::validation("end_date", msg))?;
                let query = format!(
                    r#"
                    SELECT {WASTE_COLUMNS}
                    FROM waste_records
                    WHERE user_id = $1 AND waste_date >= $2 AND waste_date < $3
                    ORDER BY waste_date DESC, created_at DESC
                    "#
                );
                sqlx::query_as::<_, WasteRow>(&query)
                    .bind(user_id)
                    .bind(range.start)
                    .bind(range.end)
                    .fetch_all(&self.db)
                    .await?
            }
            None => {
                let query = format!(
                    r#"
                    SELECT {WASTE_COLUMNS}
                    FROM waste_records
                    WHERE user_id = $1
                    ORDER BY waste_date DESC, created_at DESC
                    "#
                );
                sqlx::query_as::<_, WasteRow>(&query)
                    .bind(user_id)
                    .fetch_all(&self.db)
                    .await?
            }
        };

        rows.into_iter().map(WasteRow::into_record).collect()
    }
}
