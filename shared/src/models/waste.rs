//! Waste ledger model

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{FoodCategory, Unit, WasteReason};

/// An append-only record that a quantity of product was discarded.
///
/// `original_item_id` is a weak, lookup-only back-reference: the referenced
/// inventory item may be deleted independently without invalidating the
/// record. Corrections are modeled as new offsetting records, never as
/// mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WasteRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub original_item_id: Option<Uuid>,
    pub name: String,
    pub category: FoodCategory,
    pub wasted_quantity: Decimal,
    pub unit: Unit,
    pub waste_reason: WasteReason,
    pub wasted_value: Option<Decimal>,
    pub waste_date: NaiveDate,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}
