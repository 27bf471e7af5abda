//! Dish Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub type DishId = i64;

/// Dish entity (server-owned, read-only on the client)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: DishId,
    #[serde(default)]
    pub canteen_id: Option<i64>,
    /// Canonical, language-neutral name used as translation key
    pub name: String,
    /// Stall / category name (None = general stall)
    #[serde(default)]
    pub category: Option<String>,
    /// Base price in yuan
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub calories: Option<f64>,
    #[serde(default)]
    pub ingredients: Option<String>,
    #[serde(default)]
    pub ingredients_zh: Option<String>,
    #[serde(default = "default_available", deserialize_with = "flag")]
    pub is_available: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_available() -> bool {
    true
}

/// SQLite rows report booleans as 0/1
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Int(i) => i != 0,
    })
}

impl Dish {
    /// Base price, never negative
    pub fn base_price(&self) -> Decimal {
        self.price.unwrap_or(Decimal::ZERO).max(Decimal::ZERO)
    }
}

/// Reference to a dish: either just its identifier or the full record
#[derive(Debug, Clone, PartialEq)]
pub enum DishRef {
    Id(DishId),
    Full(Box<Dish>),
}

impl DishRef {
    pub fn id(&self) -> DishId {
        match self {
            DishRef::Id(id) => *id,
            DishRef::Full(dish) => dish.id,
        }
    }
}

impl From<DishId> for DishRef {
    fn from(id: DishId) -> Self {
        DishRef::Id(id)
    }
}

impl From<Dish> for DishRef {
    fn from(dish: Dish) -> Self {
        DishRef::Full(Box::new(dish))
    }
}
