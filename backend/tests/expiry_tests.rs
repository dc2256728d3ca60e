//! Expiry classification tests
//!
//! Covers the freshness boundary rules:
//! - ceiling day count over the calendar delta
//! - expired / critical / warning / good partitioning
//! - "expiring soon" horizon selection excluding expired items

use chrono::{DateTime, Duration, NaiveDate, Utc};
use proptest::prelude::*;

use shared::models::{
    classify_expiry, days_until_expiry, is_expiring_within, ExpiryStatus,
    DEFAULT_EXPIRY_HORIZON_DAYS,
};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Reference instant at midday UTC on the given date
fn at(s: &str) -> DateTime<Utc> {
    date(s).and_hms_opt(12, 0, 0).unwrap().and_utc()
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Items without an expiry date have no freshness classification
    #[test]
    fn test_no_expiry_date() {
        let now = at("2025-03-10");
        assert_eq!(days_until_expiry(None, now), None);
        assert_eq!(classify_expiry(None, now), (None, ExpiryStatus::None));
        assert!(!is_expiring_within(None, DEFAULT_EXPIRY_HORIZON_DAYS));
    }

    /// An item that expired yesterday is expired and never "expiring soon"
    #[test]
    fn test_expired_yesterday() {
        let now = at("2025-03-10");
        let (days, status) = classify_expiry(Some(date("2025-03-09")), now);

        assert_eq!(days, Some(-1));
        assert_eq!(status, ExpiryStatus::Expired);
        assert!(!is_expiring_within(days, 3));
        assert!(!is_expiring_within(days, 365));
    }

    /// An item expiring later today reports 0 days and is already expired
    #[test]
    fn test_expiring_today() {
        let now = at("2025-03-10");
        let (days, status) = classify_expiry(Some(date("2025-03-10")), now);

        assert_eq!(days, Some(0));
        assert_eq!(status, ExpiryStatus::Expired);
        assert!(!is_expiring_within(days, 3));
    }

    #[test]
    fn test_critical_tomorrow() {
        let now = at("2025-03-10");
        let (days, status) = classify_expiry(Some(date("2025-03-11")), now);

        assert_eq!(days, Some(1));
        assert_eq!(status, ExpiryStatus::Critical);
        assert!(is_expiring_within(days, 1));
    }

    /// Two days out is a warning; included at horizon 3, excluded at 1
    #[test]
    fn test_warning_in_two_days() {
        let now = at("2025-03-10");
        let (days, status) = classify_expiry(Some(date("2025-03-12")), now);

        assert_eq!(days, Some(2));
        assert_eq!(status, ExpiryStatus::Warning);
        assert!(is_expiring_within(days, 3));
        assert!(!is_expiring_within(days, 1));
    }

    /// Exactly three days out is still a warning
    #[test]
    fn test_warning_boundary_three_days() {
        let now = at("2025-03-10");
        let (days, status) = classify_expiry(Some(date("2025-03-13")), now);

        assert_eq!(days, Some(3));
        assert_eq!(status, ExpiryStatus::Warning);
        assert!(is_expiring_within(days, DEFAULT_EXPIRY_HORIZON_DAYS));
    }

    #[test]
    fn test_good_beyond_three_days() {
        let now = at("2025-03-10");
        let (days, status) = classify_expiry(Some(date("2025-03-14")), now);

        assert_eq!(days, Some(4));
        assert_eq!(status, ExpiryStatus::Good);
        assert!(!is_expiring_within(days, 3));
        assert!(is_expiring_within(days, 7));
    }

    /// The day count is a calendar delta: time of day never shifts it
    #[test]
    fn test_time_of_day_does_not_shift_count() {
        let expiry = Some(date("2025-03-12"));
        let early = date("2025-03-10").and_hms_opt(0, 30, 0).unwrap().and_utc();
        let late = date("2025-03-10").and_hms_opt(23, 30, 0).unwrap().and_utc();

        assert_eq!(classify_expiry(expiry, early), classify_expiry(expiry, late));
    }

    #[test]
    fn test_default_horizon() {
        assert_eq!(DEFAULT_EXPIRY_HORIZON_DAYS, 3);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Status always matches the day-count partition
        #[test]
        fn prop_status_matches_day_count(offset in -60i64..60) {
            let now = at("2025-03-10");
            let expiry = date("2025-03-10") + Duration::days(offset);
            let (days, status) = classify_expiry(Some(expiry), now);

            prop_assert_eq!(days, Some(offset));
            let expected = if offset <= 0 {
                ExpiryStatus::Expired
            } else if offset <= 1 {
                ExpiryStatus::Critical
            } else if offset <= 3 {
                ExpiryStatus::Warning
            } else {
                ExpiryStatus::Good
            };
            prop_assert_eq!(status, expected);
        }

        /// Growing the horizon never drops an item from "expiring soon"
        #[test]
        fn prop_horizon_is_monotonic(days in -30i64..30, horizon in 1i64..30) {
            if is_expiring_within(Some(days), horizon) {
                prop_assert!(is_expiring_within(Some(days), horizon + 1));
            }
        }

        /// Expired items never appear in any "expiring soon" window
        #[test]
        fn prop_expired_never_expiring_soon(offset in -60i64..=0, horizon in 1i64..365) {
            let now = at("2025-03-10");
            let expiry = date("2025-03-10") + Duration::days(offset);
            let (days, status) = classify_expiry(Some(expiry), now);

            prop_assert_eq!(status, ExpiryStatus::Expired);
            prop_assert!(!is_expiring_within(days, horizon));
        }

        /// Every day count in 0 < d <= horizon is selected
        #[test]
        fn prop_in_window_selected(days in 1i64..30) {
            prop_assert!(is_expiring_within(Some(days), 30));
            prop_assert!(!is_expiring_within(Some(days), days - 1));
        }
    }
}
