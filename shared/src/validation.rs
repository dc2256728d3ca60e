//! Validation utilities for the Fridge Tracker Platform
//!
//! Field-level checks shared by the backend services and the WASM client.
//! Catalog membership is validated by the fallible `parse` constructors on
//! the catalog enums themselves.

use rust_decimal::Decimal;

// ============================================================================
// Inventory Validations
// ============================================================================

/// Validate an item or waste record name is non-empty
pub fn validate_name(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Name must not be empty");
    }
    Ok(())
}

/// Validate a quantity is strictly positive
pub fn validate_quantity(quantity: Decimal) -> Result<(), &'static str> {
    if quantity <= Decimal::ZERO {
        return Err("Quantity must be positive");
    }
    Ok(())
}

/// Validate a monetary amount is non-negative
pub fn validate_price(value: Decimal) -> Result<(), &'static str> {
    if value < Decimal::ZERO {
        return Err("Price must not be negative");
    }
    Ok(())
}

/// Validate an "expiring soon" horizon is usable (1..=365 days)
pub fn validate_expiry_horizon(days: i64) -> Result<(), &'static str> {
    if days < 1 {
        return Err("Horizon must be at least 1 day");
    }
    if days > 365 {
        return Err("Horizon must be at most 365 days");
    }
    Ok(())
}

// ============================================================================
// Reporting Validations
// ============================================================================

/// Validate a reporting window is not inverted
pub fn validate_window(
    start: chrono::NaiveDate,
    end: chrono::NaiveDate,
) -> Result<(), &'static str> {
    if end < start {
        return Err("End date must not be before start date");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_validate_name_valid() {
        assert!(validate_name("Milk").is_ok());
        assert!(validate_name("Rye bread").is_ok());
    }

    #[test]
    fn test_validate_name_invalid() {
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(dec("0.5")).is_ok());
        assert!(validate_quantity(dec("100")).is_ok());
        assert!(validate_quantity(Decimal::ZERO).is_err());
        assert!(validate_quantity(dec("-1")).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Decimal::ZERO).is_ok());
        assert!(validate_price(dec("19.99")).is_ok());
        assert!(validate_price(dec("-0.01")).is_err());
    }

    #[test]
    fn test_validate_expiry_horizon() {
        assert!(validate_expiry_horizon(1).is_ok());
        assert!(validate_expiry_horizon(3).is_ok());
        assert!(validate_expiry_horizon(365).is_ok());
        assert!(validate_expiry_horizon(0).is_err());
        assert!(validate_expiry_horizon(-3).is_err());
        assert!(validate_expiry_horizon(366).is_err());
    }

    #[test]
    fn test_validate_window() {
        let start = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
        assert!(validate_window(start, end).is_ok());
        assert!(validate_window(start, start).is_ok());
        assert!(validate_window(end, start).is_err());
    }
}
