//! Closed catalogs shared across the platform
//!
//! Categories, units, storage locations, and waste reasons are part of the
//! wire contract: values outside these enumerations are rejected at
//! validation time, never stored.

use serde::{Deserialize, Serialize};

/// Product category
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum FoodCategory {
    Dairy,
    Meat,
    Fish,
    Vegetables,
    Fruits,
    Grains,
    Beverages,
    Condiments,
    Snacks,
    Other,
}

impl FoodCategory {
    pub const ALL: [FoodCategory; 10] = [
        FoodCategory::Dairy,
        FoodCategory::Meat,
        FoodCategory::Fish,
        FoodCategory::Vegetables,
        FoodCategory::Fruits,
        FoodCategory::Grains,
        FoodCategory::Beverages,
        FoodCategory::Condiments,
        FoodCategory::Snacks,
        FoodCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FoodCategory::Dairy => "dairy",
            FoodCategory::Meat => "meat",
            FoodCategory::Fish => "fish",
            FoodCategory::Vegetables => "vegetables",
            FoodCategory::Fruits => "fruits",
            FoodCategory::Grains => "grains",
            FoodCategory::Beverages => "beverages",
            FoodCategory::Condiments => "condiments",
            FoodCategory::Snacks => "snacks",
            FoodCategory::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FoodCategory::Dairy => "Dairy",
            FoodCategory::Meat => "Meat",
            FoodCategory::Fish => "Fish",
            FoodCategory::Vegetables => "Vegetables",
            FoodCategory::Fruits => "Fruits",
            FoodCategory::Grains => "Grains",
            FoodCategory::Beverages => "Beverages",
            FoodCategory::Condiments => "Condiments",
            FoodCategory::Snacks => "Snacks",
            FoodCategory::Other => "Other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == s)
    }
}

/// Measurement unit
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    G,
    Kg,
    Ml,
    L,
    Piece,
    Pack,
    Loaf,
    Bunch,
    Slice,
    Clove,
}

impl Unit {
    pub const ALL: [Unit; 10] = [
        Unit::G,
        Unit::Kg,
        Unit::Ml,
        Unit::L,
        Unit::Piece,
        Unit::Pack,
        Unit::Loaf,
        Unit::Bunch,
        Unit::Slice,
        Unit::Clove,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::G => "g",
            Unit::Kg => "kg",
            Unit::Ml => "ml",
            Unit::L => "l",
            Unit::Piece => "piece",
            Unit::Pack => "pack",
            Unit::Loaf => "loaf",
            Unit::Bunch => "bunch",
            Unit::Slice => "slice",
            Unit::Clove => "clove",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Unit::G => "Grams",
            Unit::Kg => "Kilograms",
            Unit::Ml => "Milliliters",
            Unit::L => "Liters",
            Unit::Piece => "Piece",
            Unit::Pack => "Pack",
            Unit::Loaf => "Loaf",
            Unit::Bunch => "Bunch",
            Unit::Slice => "Slice",
            Unit::Clove => "Clove",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|u| u.as_str() == s)
    }
}

/// Where an item is stored in the household
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum StorageLocation {
    #[default]
    Refrigerator,
    Freezer,
    Pantry,
    KitchenShelf,
    Countertop,
}

impl StorageLocation {
    pub const ALL: [StorageLocation; 5] = [
        StorageLocation::Refrigerator,
        StorageLocation::Freezer,
        StorageLocation::Pantry,
        StorageLocation::KitchenShelf,
        StorageLocation::Countertop,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StorageLocation::Refrigerator => "refrigerator",
            StorageLocation::Freezer => "freezer",
            StorageLocation::Pantry => "pantry",
            StorageLocation::KitchenShelf => "kitchen_shelf",
            StorageLocation::Countertop => "countertop",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StorageLocation::Refrigerator => "Refrigerator",
            StorageLocation::Freezer => "Freezer",
            StorageLocation::Pantry => "Pantry",
            StorageLocation::KitchenShelf => "Kitchen shelf",
            StorageLocation::Countertop => "Countertop",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|l| l.as_str() == s)
    }
}

/// Why a quantity of product was discarded
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum WasteReason {
    Expired,
    Spoiled,
    Overcooked,
    NotLiked,
    TooMuch,
    Other,
}

impl WasteReason {
    pub const ALL: [WasteReason; 6] = [
        WasteReason::Expired,
        WasteReason::Spoiled,
        WasteReason::Overcooked,
        WasteReason::NotLiked,
        WasteReason::TooMuch,
        WasteReason::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WasteReason::Expired => "expired",
            WasteReason::Spoiled => "spoiled",
            WasteReason::Overcooked => "overcooked",
            WasteReason::NotLiked => "not_liked",
            WasteReason::TooMuch => "too_much",
            WasteReason::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WasteReason::Expired => "Expired",
            WasteReason::Spoiled => "Spoiled",
            WasteReason::Overcooked => "Overcooked",
            WasteReason::NotLiked => "Not liked",
            WasteReason::TooMuch => "Too much",
            WasteReason::Other => "Other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.as_str() == s)
    }
}

/// A catalog value with its human-readable label
#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    pub value: &'static str,
    pub label: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        for category in FoodCategory::ALL {
            assert_eq!(FoodCategory::parse(category.as_str()), Some(category));
        }
        assert_eq!(FoodCategory::parse("plastics"), None);
    }

    #[test]
    fn test_unit_round_trip() {
        for unit in Unit::ALL {
            assert_eq!(Unit::parse(unit.as_str()), Some(unit));
        }
        assert_eq!(Unit::parse("barrel"), None);
    }

    #[test]
    fn test_location_round_trip() {
        for location in StorageLocation::ALL {
            assert_eq!(StorageLocation::parse(location.as_str()), Some(location));
        }
        assert_eq!(StorageLocation::default(), StorageLocation::Refrigerator);
    }

    #[test]
    fn test_waste_reason_round_trip() {
        for reason in WasteReason::ALL {
            assert_eq!(WasteReason::parse(reason.as_str()), Some(reason));
        }
        assert_eq!(WasteReason::parse("vanished"), None);
    }

    /// Wire values match `as_str` for every catalog
    #[test]
    fn test_serde_wire_values() {
        assert_eq!(
            serde_json::to_string(&StorageLocation::KitchenShelf).unwrap(),
            "\"kitchen_shelf\""
        );
        assert_eq!(
            serde_json::to_string(&WasteReason::NotLiked).unwrap(),
            "\"not_liked\""
        );
        for category in FoodCategory::ALL {
            let wire = serde_json::to_string(&category).unwrap();
            assert_eq!(wire, format!("\"{}\"", category.as_str()));
        }
        for unit in Unit::ALL {
            let wire = serde_json::to_string(&unit).unwrap();
            assert_eq!(wire, format!("\"{}\"", unit.as_str()));
        }
    }
}
