//! Inventory statistics aggregation

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{is_expiring_within, FoodCategory, InventoryItem, ItemWithStatus, StorageLocation};

/// Per-category item count and value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: FoodCategory,
    pub count: i64,
    pub total_value: Decimal,
}

/// Per-location item count
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationCount {
    pub location: StorageLocation,
    pub count: i64,
}

/// A reference to an item by value, used for the min/max extremes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuedItem {
    pub id: Uuid,
    pub name: String,
    pub value: Decimal,
}

/// Derived, ephemeral summary of a user's inventory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryStats {
    pub total_items: i64,
    pub total_value: Decimal,
    pub average_value: Decimal,
    pub by_category: Vec<CategoryCount>,
    pub by_location: Vec<LocationCount>,
    pub expiring_soon: Vec<ItemWithStatus>,
    pub expired: Vec<ItemWithStatus>,
    pub most_valuable: Option<ValuedItem>,
    pub least_valuable: Option<ValuedItem>,
}

/// Aggregate the full item set into `InventoryStats` in a single pass.
///
/// Pure function of `(items, now, horizon_days)`; an empty input yields
/// zeroed counters and empty lists.
pub fn compute_inventory_stats(
    items: &[InventoryItem],
    now: DateTime<Utc>,
    horizon_days: i64,
) -> InventoryStats {
    let mut total_value = Decimal::ZERO;
    let mut by_category: BTreeMap<FoodCategory, (i64, Decimal)> = BTreeMap::new();
    let mut by_location: BTreeMap<StorageLocation, i64> = BTreeMap::new();
    let mut expiring_soon: Vec<ItemWithStatus> = Vec::new();
    let mut expired: Vec<ItemWithStatus> = Vec::new();
    let mut most_valuable: Option<ValuedItem> = None;
    let mut least_valuable: Option<ValuedItem> = None;

    for item in items {
        let with_status = ItemWithStatus::derive(item.clone(), now);
        let value = with_status.calculated_total_value;

        total_value += value;

        let entry = by_category
            .entry(item.category)
            .or_insert((0, Decimal::ZERO));
        entry.0 += 1;
        entry.1 += value;

        *by_location.entry(item.location).or_insert(0) += 1;

        if most_valuable.as_ref().map_or(true, |m| value > m.value) {
            most_valuable = Some(ValuedItem {
                id: item.id,
                name: item.name.clone(),
                value,
            });
        }
        if least_valuable.as_ref().map_or(true, |m| value < m.value) {
            least_valuable = Some(ValuedItem {
                id: item.id,
                name: item.name.clone(),
                value,
            });
        }

        if with_status.is_expired {
            expired.push(with_status);
        } else if is_expiring_within(with_status.days_until_expiry, horizon_days) {
            expiring_soon.push(with_status);
        }
    }

    // Soonest-to-expire first; most overdue first for the expired list
    expiring_soon.sort_by_key(|i| i.days_until_expiry);
    expired.sort_by_key(|i| i.days_until_expiry);

    let total_items = items.len() as i64;
    let average_value = if total_items > 0 {
        total_value / Decimal::from(total_items)
    } else {
        Decimal::ZERO
    };

    InventoryStats {
        total_items,
        total_value,
        average_value,
        by_category: by_category
            .into_iter()
            .map(|(category, (count, total_value))| CategoryCount {
                category,
                count,
                total_value,
            })
            .collect(),
        by_location: by_location
            .into_iter()
            .map(|(location, count)| LocationCount { location, count })
            .collect(),
        expiring_soon,
        expired,
        most_valuable,
        least_valuable,
    }
}
