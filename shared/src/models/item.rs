//! Inventory item model

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{classify_expiry, ExpiryStatus, FoodCategory, StorageLocation, Unit};

/// One physical product instance a user owns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub brand: Option<String>,
    pub category: FoodCategory,
    pub ingredients_text: Option<String>,
    pub nutrition_text: Option<String>,
    pub allergens: Vec<String>,
    pub intolerances: Vec<String>,
    pub suitable_diets: Vec<String>,
    pub quantity: Decimal,
    pub unit: Unit,
    pub price_per_unit: Option<Decimal>,
    pub total_price: Option<Decimal>,
    pub purchase_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub location: StorageLocation,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl InventoryItem {
    /// Total monetary value of the item.
    ///
    /// An explicitly stated total is authoritative over the per-unit
    /// estimate; with neither price field present the value is zero.
    pub fn calculated_total_value(&self) -> Decimal {
        match (self.total_price, self.price_per_unit) {
            (Some(total), _) => total,
            (None, Some(per_unit)) => per_unit * self.quantity,
            (None, None) => Decimal::ZERO,
        }
    }
}

/// An inventory item together with its derived, never-persisted fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemWithStatus {
    #[serde(flatten)]
    pub item: InventoryItem,
    pub days_until_expiry: Option<i64>,
    pub expiry_status: ExpiryStatus,
    pub is_expired: bool,
    pub calculated_total_value: Decimal,
}

impl ItemWithStatus {
    /// Compute the derived fields for an item against a reference instant
    pub fn derive(item: InventoryItem, now: DateTime<Utc>) -> Self {
        let (days_until_expiry, expiry_status) = classify_expiry(item.expiry_date, now);
        let calculated_total_value = item.calculated_total_value();
        Self {
            days_until_expiry,
            expiry_status,
            is_expired: expiry_status == ExpiryStatus::Expired,
            calculated_total_value,
            item,
        }
    }
}
