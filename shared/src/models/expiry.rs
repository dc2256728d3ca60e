//! Expiry classification
//!
//! Freshness is never persisted; it is derived from an item's expiry date and
//! a reference instant on every read, so two callers computing at the same
//! instant always agree.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Items at or below this many remaining days are critical
pub const CRITICAL_WITHIN_DAYS: i64 = 1;

/// Items at or below this many remaining days are in warning
pub const WARNING_WITHIN_DAYS: i64 = 3;

/// Default horizon for "expiring soon" queries
pub const DEFAULT_EXPIRY_HORIZON_DAYS: i64 = 3;

/// Derived freshness classification of an item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryStatus {
    None,
    Good,
    Warning,
    Critical,
    Expired,
}

impl ExpiryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpiryStatus::None => "none",
            ExpiryStatus::Good => "good",
            ExpiryStatus::Warning => "warning",
            ExpiryStatus::Critical => "critical",
            ExpiryStatus::Expired => "expired",
        }
    }
}

/// Days remaining until the expiry date, as a ceiling of the calendar delta.
///
/// An item expiring later today reports 0; once the expiry date is strictly
/// in the past the count goes negative regardless of time of day.
pub fn days_until_expiry(expiry_date: Option<NaiveDate>, now: DateTime<Utc>) -> Option<i64> {
    expiry_date.map(|date| (date - now.date_naive()).num_days())
}

/// Classify an expiry date against a reference instant.
///
/// Items without an expiry date have no freshness classification and are
/// excluded from expiring/expired queries.
pub fn classify_expiry(
    expiry_date: Option<NaiveDate>,
    now: DateTime<Utc>,
) -> (Option<i64>, ExpiryStatus) {
    match days_until_expiry(expiry_date, now) {
        None => (None, ExpiryStatus::None),
        Some(days) if days <= 0 => (Some(days), ExpiryStatus::Expired),
        Some(days) if days <= CRITICAL_WITHIN_DAYS => (Some(days), ExpiryStatus::Critical),
        Some(days) if days <= WARNING_WITHIN_DAYS => (Some(days), ExpiryStatus::Warning),
        Some(days) => (Some(days), ExpiryStatus::Good),
    }
}

/// Whether a day count falls in the "expiring soon" window `0 < days <= horizon`.
///
/// Expired items are excluded; they are reported separately.
pub fn is_expiring_within(days_until_expiry: Option<i64>, horizon_days: i64) -> bool {
    matches!(days_until_expiry, Some(days) if days > 0 && days <= horizon_days)
}
