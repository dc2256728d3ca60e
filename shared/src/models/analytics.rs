//! Expense analytics engine
//!
//! Stateless report generation over the inventory (purchase side) and the
//! waste ledger (loss side) for a half-open date window. Every division is
//! zero-guarded: a zero denominator yields 0, never NaN or an error.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::DateRange;

use super::{FoodCategory, InventoryItem, WasteReason, WasteRecord};

/// How to value a waste record that carries no explicit `wasted_value`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum WasteValuationPolicy {
    /// Unpriced records count as zero
    Zero,
    /// Estimate from the referenced item's per-unit price, falling back to
    /// zero when the item is gone or unpriced
    #[default]
    EstimateFromItem,
}

impl WasteValuationPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            WasteValuationPolicy::Zero => "zero",
            WasteValuationPolicy::EstimateFromItem => "estimate_from_item",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "zero" => Some(WasteValuationPolicy::Zero),
            "estimate_from_item" => Some(WasteValuationPolicy::EstimateFromItem),
            _ => None,
        }
    }
}

/// Purchased vs. wasted value for one category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryExpense {
    pub category: FoodCategory,
    pub purchased: Decimal,
    pub wasted: Decimal,
    pub waste_percentage: Decimal,
}

/// Count and value of waste records sharing a reason
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WasteReasonBreakdown {
    pub reason: WasteReason,
    pub count: i64,
    pub total_value: Decimal,
    pub percentage: Decimal,
}

/// Windowed comparison of purchased value against wasted value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseAnalyticsReport {
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    pub total_purchased: Decimal,
    pub total_wasted: Decimal,
    pub waste_percentage: Decimal,
    pub savings_potential: Decimal,
    pub category_breakdown: Vec<CategoryExpense>,
    pub waste_reasons: Vec<WasteReasonBreakdown>,
}

/// `part / whole * 100`, or 0 when the denominator is 0
pub fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole > Decimal::ZERO {
        (part / whole * Decimal::from(100)).round_dp(2)
    } else {
        Decimal::ZERO
    }
}

/// Monetary value of one waste record under the given policy
pub fn resolve_wasted_value(
    record: &WasteRecord,
    items_by_id: &HashMap<Uuid, &InventoryItem>,
    policy: WasteValuationPolicy,
) -> Decimal {
    if let Some(value) = record.wasted_value {
        return value;
    }
    if policy == WasteValuationPolicy::EstimateFromItem {
        if let Some(item) = record
            .original_item_id
            .and_then(|id| items_by_id.get(&id))
        {
            if let Some(per_unit) = item.price_per_unit {
                return per_unit * record.wasted_quantity;
            }
        }
    }
    Decimal::ZERO
}

/// Build the expense analytics report for a window.
///
/// `items` is the user's full inventory (records outside the window still
/// serve as lookup targets for waste valuation); purchases are selected by
/// `purchase_date` and waste records by `waste_date`, both against the
/// half-open `[start, end)` window.
pub fn compute_expense_analytics(
    items: &[InventoryItem],
    records: &[WasteRecord],
    window: DateRange,
    policy: WasteValuationPolicy,
) -> ExpenseAnalyticsReport {
    let items_by_id: HashMap<Uuid, &InventoryItem> =
        items.iter().map(|item| (item.id, item)).collect();

    let mut total_purchased = Decimal::ZERO;
    let mut purchased_by_category: BTreeMap<FoodCategory, Decimal> = BTreeMap::new();
    for item in items {
        let purchased_in_window = item
            .purchase_date
            .map_or(false, |date| window.contains(date));
        if !purchased_in_window {
            continue;
        }
        let value = item.calculated_total_value();
        total_purchased += value;
        *purchased_by_category
            .entry(item.category)
            .or_insert(Decimal::ZERO) += value;
    }

    let mut total_wasted = Decimal::ZERO;
    let mut wasted_by_category: BTreeMap<FoodCategory, Decimal> = BTreeMap::new();
    let mut by_reason: BTreeMap<WasteReason, (i64, Decimal)> = BTreeMap::new();
    for record in records {
        if !window.contains(record.waste_date) {
            continue;
        }
        let value = resolve_wasted_value(record, &items_by_id, policy);
        total_wasted += value;
        *wasted_by_category
            .entry(record.category)
            .or_insert(Decimal::ZERO) += value;
        let entry = by_reason
            .entry(record.waste_reason)
            .or_insert((0, Decimal::ZERO));
        entry.0 += 1;
        entry.1 += value;
    }

    // A category appears in the breakdown when either side touched it
    let categories: BTreeSet<FoodCategory> = purchased_by_category
        .keys()
        .chain(wasted_by_category.keys())
        .copied()
        .collect();
    let category_breakdown = categories
        .into_iter()
        .map(|category| {
            let purchased = purchased_by_category
                .get(&category)
                .copied()
                .unwrap_or(Decimal::ZERO);
            let wasted = wasted_by_category
                .get(&category)
                .copied()
                .unwrap_or(Decimal::ZERO);
            CategoryExpense {
                category,
                purchased,
                wasted,
                waste_percentage: percent_of(wasted, purchased),
            }
        })
        .collect();

    let waste_reasons = by_reason
        .into_iter()
        .map(|(reason, (count, total_value))| WasteReasonBreakdown {
            reason,
            count,
            total_value,
            percentage: percent_of(total_value, total_wasted),
        })
        .collect();

    ExpenseAnalyticsReport {
        start_date: window.start,
        end_date: window.end,
        total_purchased,
        total_wasted,
        waste_percentage: percent_of(total_wasted, total_purchased),
        savings_potential: total_wasted,
        category_breakdown,
        waste_reasons,
    }
}
