//! Recommendation DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Dish card returned by the recommendation endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedDish {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub canteen_id: Option<i64>,
    #[serde(default)]
    pub canteen_name: Option<String>,
    #[serde(default)]
    pub avg_score: Option<f64>,
    #[serde(default)]
    pub rating_count: Option<i64>,
}

/// Recommendations for one weekday
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRecommendations {
    pub day_name_en: String,
    pub day_name_zh: String,
    #[serde(default)]
    pub dishes: Vec<RecommendedDish>,
}

/// Weekday (0 = Monday) -> recommendations
pub type WeeklyRecommendations = BTreeMap<u8, DayRecommendations>;
