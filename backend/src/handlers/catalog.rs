//! Catalog endpoint handler
//!
//! The catalogs are a fixed part of the wire contract; clients fetch them
//! once to populate pickers.

use axum::Json;
use serde::Serialize;

use crate::models::{CatalogEntry, FoodCategory, StorageLocation, Unit, WasteReason};

#[derive(Serialize)]
pub struct CatalogResponse {
    pub categories: Vec<CatalogEntry>,
    pub units: Vec<CatalogEntry>,
    pub locations: Vec<CatalogEntry>,
    pub waste_reasons: Vec<CatalogEntry>,
}

/// List every closed catalog with human-readable labels
pub async fn get_catalog() -> Json<CatalogResponse> {
    Json(CatalogResponse {
        categories: FoodCategory::ALL
            .iter()
            .map(|c| CatalogEntry {
                value: c.as_str(),
                label: c.label(),
            })
            .collect(),
        units: Unit::ALL
            .iter()
            .map(|u| CatalogEntry {
                value: u.as_str(),
                label: u.label(),
            })
            .collect(),
        locations: StorageLocation::ALL
            .iter()
            .map(|l| CatalogEntry {
                value: l.as_str(),
                label: l.label(),
            })
            .collect(),
        waste_reasons: WasteReason::ALL
            .iter()
            .map(|r| CatalogEntry {
                value: r.as_str(),
                label: r.label(),
            })
            .collect(),
    })
}
