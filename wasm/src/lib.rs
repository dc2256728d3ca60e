//! WebAssembly module for the Fridge Tracker Platform
//!
//! Provides client-side computation for:
//! - Expiry classification
//! - Item valuation
//! - Offline data validation

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn parse_date(s: &str) -> Result<NaiveDate, JsValue> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| JsValue::from_str(&format!("Invalid date: {}", e)))
}

fn start_of_day_utc(date: NaiveDate) -> DateTime<Utc> {
    DateTime::from_naive_utc_and_offset(date.and_time(NaiveTime::MIN), Utc)
}

/// Classify an item's freshness from its expiry date and today's date
/// (both YYYY-MM-DD; pass null for items without an expiry date)
#[wasm_bindgen]
pub fn classify_expiry_status(
    expiry_date: Option<String>,
    today: &str,
) -> Result<String, JsValue> {
    let now = start_of_day_utc(parse_date(today)?);
    let expiry = match expiry_date {
        Some(s) => Some(parse_date(&s)?),
        None => None,
    };

    let (_, status) = classify_expiry(expiry, now);
    Ok(status.as_str().to_string())
}

/// Days remaining until expiry, as a ceiling of the calendar delta
#[wasm_bindgen]
pub fn days_until_expiry_from(expiry_date: &str, today: &str) -> Result<i64, JsValue> {
    let now = start_of_day_utc(parse_date(today)?);
    let days = days_until_expiry(Some(parse_date(expiry_date)?), now);
    Ok(days.unwrap_or(0))
}

/// Total item value: explicit total wins over the per-unit estimate
#[wasm_bindgen]
pub fn calculate_item_value(
    total_price: Option<f64>,
    price_per_unit: Option<f64>,
    quantity: f64,
) -> f64 {
    if let Some(total) = total_price {
        return total;
    }
    if let Some(per_unit) = price_per_unit {
        let per_unit = Decimal::try_from(per_unit).unwrap_or(Decimal::ZERO);
        let quantity = Decimal::try_from(quantity).unwrap_or(Decimal::ZERO);
        return (per_unit * quantity).to_string().parse().unwrap_or(0.0);
    }
    0.0
}

/// Compute inventory statistics client-side from a JSON array of items
#[wasm_bindgen]
pub fn compute_stats_json(
    items_json: &str,
    today: &str,
    horizon_days: i64,
) -> Result<String, JsValue> {
    let items: Vec<InventoryItem> = serde_json::from_str(items_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid items JSON: {}", e)))?;
    let now = start_of_day_utc(parse_date(today)?);

    let stats = compute_inventory_stats(&items, now, horizon_days);
    serde_json::to_string(&stats).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Validate an item name offline
#[wasm_bindgen]
pub fn validate_item_name(name: &str) -> bool {
    validate_name(name).is_ok()
}

/// Validate a quantity offline
#[wasm_bindgen]
pub fn validate_item_quantity(quantity: f64) -> bool {
    Decimal::try_from(quantity)
        .map(|q| validate_quantity(q).is_ok())
        .unwrap_or(false)
}

/// Check a category value against the closed catalog
#[wasm_bindgen]
pub fn is_known_category(value: &str) -> bool {
    FoodCategory::parse(value).is_some()
}

/// Check a unit value against the closed catalog
#[wasm_bindgen]
pub fn is_known_unit(value: &str) -> bool {
    Unit::parse(value).is_some()
}

/// Check a storage location value against the closed catalog
#[wasm_bindgen]
pub fn is_known_location(value: &str) -> bool {
    StorageLocation::parse(value).is_some()
}

/// Check a waste reason value against the closed catalog
#[wasm_bindgen]
pub fn is_known_waste_reason(value: &str) -> bool {
    WasteReason::parse(value).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_expiry_status() {
        assert_eq!(
            classify_expiry_status(Some("2025-03-09".to_string()), "2025-03-10").unwrap(),
            "expired"
        );
        assert_eq!(
            classify_expiry_status(Some("2025-03-11".to_string()), "2025-03-10").unwrap(),
            "critical"
        );
        assert_eq!(
            classify_expiry_status(Some("2025-03-13".to_string()), "2025-03-10").unwrap(),
            "warning"
        );
        assert_eq!(
            classify_expiry_status(Some("2025-03-20".to_string()), "2025-03-10").unwrap(),
            "good"
        );
        assert_eq!(classify_expiry_status(None, "2025-03-10").unwrap(), "none");
    }

    #[test]
    fn test_days_until_expiry_from() {
        assert_eq!(days_until_expiry_from("2025-03-13", "2025-03-10").unwrap(), 3);
        assert_eq!(days_until_expiry_from("2025-03-09", "2025-03-10").unwrap(), -1);
    }

    #[test]
    fn test_calculate_item_value() {
        // Explicit total wins
        let value = calculate_item_value(Some(120.0), Some(50.0), 2.0);
        assert!((value - 120.0).abs() < 0.001);

        // Per-unit fallback
        let value = calculate_item_value(None, Some(50.0), 2.0);
        assert!((value - 100.0).abs() < 0.001);

        // No prices at all
        let value = calculate_item_value(None, None, 2.0);
        assert!(value.abs() < 0.001);
    }

    #[test]
    fn test_offline_validation() {
        assert!(validate_item_name("Milk"));
        assert!(!validate_item_name("  "));
        assert!(validate_item_quantity(1.5));
        assert!(!validate_item_quantity(0.0));
        assert!(is_known_category("dairy"));
        assert!(!is_known_category("plastics"));
        assert!(is_known_unit("kg"));
        assert!(is_known_location("kitchen_shelf"));
        assert!(is_known_waste_reason("too_much"));
    }
}
