//! Inventory service for managing a user's fridge items
//!
//! Owns the CRUD contract over inventory items. Derived fields (expiry
//! status, monetary value) are never persisted; they are recomputed against
//! "now" whenever items are read back.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{
    compute_inventory_stats, is_expiring_within, FoodCategory, InventoryItem, InventorySnapshot,
    InventoryStats, ItemWithStatus, StorageLocation, Unit,
};
use shared::validation::{validate_expiry_horizon, validate_name, validate_price, validate_quantity};

/// Inventory service scoped to the authenticated user on every call
#[derive(Clone)]
pub struct InventoryService {
    db: PgPool,
}

/// Input for adding an inventory item
#[derive(Debug, Deserialize)]
pub struct CreateItemInput {
    pub name: String,
    pub brand: Option<String>,
    pub category: String,
    pub ingredients_text: Option<String>,
    pub nutrition_text: Option<String>,
    #[serde(default)]
    pub allergens: Vec<String>,
    #[serde(default)]
    pub intolerances: Vec<String>,
    #[serde(default)]
    pub suitable_diets: Vec<String>,
    pub quantity: Decimal,
    pub unit: String,
    pub price_per_unit: Option<Decimal>,
    pub total_price: Option<Decimal>,
    pub purchase_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub location: Option<String>,
    pub notes: Option<String>,
}

/// Input for partially updating an inventory item.
///
/// Omitted fields are left untouched; only supplied fields are validated and
/// overwritten.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateItemInput {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub ingredients_text: Option<String>,
    pub nutrition_text: Option<String>,
    pub allergens: Option<Vec<String>>,
    pub intolerances: Option<Vec<String>>,
    pub suitable_diets: Option<Vec<String>>,
    pub quantity: Option<Decimal>,
    pub unit: Option<String>,
    pub price_per_unit: Option<Decimal>,
    pub total_price: Option<Decimal>,
    pub purchase_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub location: Option<String>,
    pub notes: Option<String>,
}

/// Row shape of the inventory_items table; catalog fields are stored as text
#[derive(Debug, FromRow)]
struct ItemRow {
    id: Uuid,
    user_id: Uuid,
    name: String,
    brand: Option<String>,
    category: String,
    ingredients_text: Option<String>,
    nutrition_text: Option<String>,
    allergens: Vec<String>,
    intolerances: Vec<String>,
    suitable_diets: Vec<String>,
    quantity: Decimal,
    unit: String,
    price_per_unit: Option<Decimal>,
    total_price: Option<Decimal>,
    purchase_date: Option<NaiveDate>,
    expiry_date: Option<NaiveDate>,
    location: String,
    notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ItemRow {
    fn into_item(self) -> AppResult<InventoryItem> {
        let category = FoodCategory::parse(&self.category).ok_or_else(|| {
            AppError::Internal(format!("Unknown category in store: {}", self.category))
        })?;
        let unit = Unit::parse(&self.unit)
            .ok_or_else(|| AppError::Internal(format!("Unknown unit in store: {}", self.unit)))?;
        let location = StorageLocation::parse(&self.location).ok_or_else(|| {
            AppError::Internal(format!("Unknown location in store: {}", self.location))
        })?;

        Ok(InventoryItem {
            id: self.id,
            user_id: self.user_id,
            name: self.name,
            brand: self.brand,
            category,
            ingredients_text: self.ingredients_text,
            nutrition_text: self.nutrition_text,
            allergens: self.allergens,
            intolerances: self.intolerances,
            suitable_diets: self.suitable_diets,
            quantity: self.quantity,
            unit,
            price_per_unit: self.price_per_unit,
            total_price: self.total_price,
            purchase_date: self.purchase_date,
            expiry_date: self.expiry_date,
            location,
            notes: self.notes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

const ITEM_COLUMNS: &str = "id, user_id, name, brand, category, ingredients_text, nutrition_text, \
     allergens, intolerances, suitable_diets, quantity, unit, price_per_unit, total_price, \
     purchase_date, expiry_date, location, notes, created_at, updated_at";

impl InventoryService {
    /// Create a new InventoryService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Add a new item to the user's inventory
    ///
    /// Validation runs before any store call; a failed add leaves the store
    /// untouched. The store assigns the id and both timestamps.
    pub async fn create_item(
        &self,
        user_id: Uuid,
        input: CreateItemInput,
    ) -> AppResult<InventoryItem> {
        validate_name(&input.name).map_err(|msg| AppError::validation("name", msg))?;
        let category = FoodCategory::parse(&input.category)
            .ok_or_else(|| AppError::validation("category", "Unknown category"))?;
        let unit =
            Unit::parse(&input.unit).ok_or_else(|| AppError::validation("unit", "Unknown unit"))?;
        validate_quantity(input.quantity).map_err(|msg| AppError::validation("quantity", msg))?;
        if let Some(price) = input.price_per_unit {
            validate_price(price).map_err(|msg| AppError::validation("price_per_unit", msg))?;
        }
        if let Some(price) = input.total_price {
            validate_price(price).map_err(|msg| AppError::validation("total_price", msg))?;
        }
        let location = match &input.location {
            Some(value) => StorageLocation::parse(value)
                .ok_or_else(|| AppError::validation("location", "Unknown location"))?,
            None => StorageLocation::default(),
        };

        let query = format!(
            r#"
            INSERT INTO inventory_items (
                user_id, name, brand, category, ingredients_text, nutrition_text,
                allergens, intolerances, suitable_diets, quantity, unit,
                price_per_unit, total_price, purchase_date, expiry_date, location, notes
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            RETURNING {ITEM_COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, ItemRow>(&query)
            .bind(user_id)
            .bind(input.name.trim())
            .bind(&input.brand)
            .bind(category.as_str())
            .bind(&input.ingredients_text)
            .bind(&input.nutrition_text)
            .bind(&input.allergens)
            .bind(&input.intolerances)
            .bind(&input.suitable_diets)
            .bind(input.quantity)
            .bind(unit.as_str())
            .bind(input.price_per_unit)
            .bind(input.total_price)
            .bind(input.purchase_date)
            .bind(input.expiry_date)
            .bind(location.as_str())
            .bind(&input.notes)
            .fetch_one(&self.db)
            .await?;

        row.into_item()
    }

    /// Get a single item owned by the user
    pub async fn get_item(&self, user_id: Uuid, item_id: Uuid) -> AppResult<InventoryItem> {
        let query =
            format!("SELECT {ITEM_COLUMNS} FROM inventory_items WHERE id = $1 AND user_id = $2");
        let row = sqlx::query_as::<_, ItemRow>(&query)
            .bind(item_id)
            .bind(user_id)
            .fetch_optional(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Item".to_string()))?;

        row.into_item()
    }

    /// List all items owned by the user
    pub async fn list_items(&self, user_id: Uuid) -> AppResult<Vec<InventoryItem>> {
        let query = format!(
            "SELECT {ITEM_COLUMNS} FROM inventory_items WHERE user_id = $1 ORDER BY created_at DESC"
        );
        let rows = sqlx::query_as::<_, ItemRow>(&query)
            .bind(user_id)
            .fetch_all(&self.db)
            .await?;

        rows.into_iter().map(ItemRow::into_item).collect()
    }

    /// Partially update an item
    ///
    /// Identity and created_at are immutable; updated_at is refreshed by the
    /// store. Supplied fields are validated against the same rules as create;
    /// a validation failure touches nothing.
    pub async fn update_item(
        &self,
        user_id: Uuid,
        item_id: Uuid,
        input: UpdateItemInput,
    ) -> AppResult<InventoryItem> {
        let existing = self.get_item(user_id, item_id).await?;

        let name = match input.name {
            Some(name) => {
                validate_name(&name).map_err(|msg| AppError::validation("name", msg))?;
                name.trim().to_string()
            }
            None => existing.name,
        };
        let category = match &input.category {
            Some(value) => FoodCategory::parse(value)
                .ok_or_else(|| AppError::validation("category", "Unknown category"))?,
            None => existing.category,
        };
        let unit = match &input.unit {
            Some(value) => {
                Unit::parse(value).ok_or_else(|| AppError::validation("unit", "Unknown unit"))?
            }
            None => existing.unit,
        };
        let quantity = match input.quantity {
            Some(quantity) => {
                validate_quantity(quantity).map_err(|msg| AppError::validation("quantity", msg))?;
                quantity
            }
            None => existing.quantity,
        };
        let price_per_unit = match input.price_per_unit {
            Some(price) => {
                validate_price(price).map_err(|msg| AppError::validation("price_per_unit", msg))?;
                Some(price)
            }
            None => existing.price_per_unit,
        };
        let total_price = match input.total_price {
            Some(price) => {
                validate_price(price).map_err(|msg| AppError::validation("total_price", msg))?;
                Some(price)
            }
            None => existing.total_price,
        };
        let location = match &input.location {
            Some(value) => StorageLocation::parse(value)
                .ok_or_else(|| AppError::validation("location", "Unknown location"))?,
            None => existing.location,
        };

        let brand = input.brand.or(existing.brand);
        let ingredients_text = input.ingredients_text.or(existing.ingredients_text);
        let nutrition_text = input.nutrition_text.or(existing.nutrition_text);
        let allergens = input.allergens.unwrap_or(existing.allergens);
        let intolerances = input.intolerances.unwrap_or(existing.intolerances);
        let suitable_diets = input.suitable_diets.unwrap_or(existing.suitable_diets);
        let purchase_date = input.purchase_date.or(existing.purchase_date);
        let expiry_date = input.expiry_date.or(existing.expiry_date);
        let notes = input.notes.or(existing.notes);

        let query = format!(
            r#"
            UPDATE inventory_items
            SET name = $1, brand = $2, category = $3, ingredients_text = $4,
                nutrition_text = $5, allergens = $6, intolerances = $7,
                suitable_diets = $8, quantity = $9, unit = $10, price_per_unit = $11,
                total_price = $12, purchase_date = $13, expiry_date = $14,
                location = $15, notes = $16, updated_at = NOW()
            WHERE id = $17 AND user_id = $18
            RETURNING {ITEM_COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, ItemRow>(&query)
            .bind(&name)
            .bind(&brand)
            .bind(category.as_str())
            .bind(&ingredients_text)
            .bind(&nutrition_text)
            .bind(&allergens)
            .bind(&intolerances)
            .bind(&suitable_diets)
            .bind(quantity)
            .bind(unit.as_str())
            .bind(price_per_unit)
            .bind(total_price)
            .bind(purchase_date)
            .bind(expiry_date)
            .bind(location.as_str())
            .bind(&notes)
            .bind(item_id)
            .bind(user_id)
            .fetch_one(&self.db)
            .await?;

        row.into_item()
    }

    /// Delete an item owned by the user
    pub async fn delete_item(&self, user_id: Uuid, item_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM inventory_items WHERE id = $1 AND user_id = $2")
            .bind(item_id)
            .bind(user_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Item".to_string()));
        }

        Ok(())
    }

    /// Items expiring within the horizon, soonest first
    ///
    /// Expired items are excluded; they are reported by `get_stats`.
    pub async fn expiring_items(
        &self,
        user_id: Uuid,
        horizon_days: i64,
    ) -> AppResult<Vec<ItemWithStatus>> {
        validate_expiry_horizon(horizon_days)
            .map_err(|msg| AppError::validation("within_days", msg))?;

        let now = Utc::now();
        let mut expiring: Vec<ItemWithStatus> = self
            .list_items(user_id)
            .await?
            .into_iter()
            .map(|item| ItemWithStatus::derive(item, now))
            .filter(|item| is_expiring_within(item.days_until_expiry, horizon_days))
            .collect();
        expiring.sort_by_key(|item| item.days_until_expiry);

        Ok(expiring)
    }

    /// Aggregate the user's inventory into statistics
    pub async fn get_stats(&self, user_id: Uuid, horizon_days: i64) -> AppResult<InventoryStats> {
        validate_expiry_horizon(horizon_days)
            .map_err(|msg| AppError::validation("within_days", msg))?;

        let items = self.list_items(user_id).await?;
        Ok(compute_inventory_stats(&items, Utc::now(), horizon_days))
    }

    /// Read-only snapshot exported to the recommendation service
    ///
    /// Items and stats are derived against the same instant so the two views
    /// agree.
    pub async fn snapshot(&self, user_id: Uuid, horizon_days: i64) -> AppResult<InventorySnapshot> {
        let items = self.list_items(user_id).await?;
        let now = Utc::now();
        let stats = compute_inventory_stats(&items, now, horizon_days);
        let items = items
            .into_iter()
            .map(|item| ItemWithStatus::derive(item, now))
            .collect();

        Ok(InventorySnapshot { items, stats })
    }
}
