//! Rating Model

use serde::{Deserialize, Serialize};

/// A user's rating of a dish
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub dish_id: Option<i64>,
    /// 1-5
    pub score: i32,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    /// ISO-8601 timestamp (naive UTC)
    pub created_at: String,
}

/// Create rating payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingCreate {
    pub user_id: i64,
    pub dish_id: i64,
    pub score: i32,
    pub comment: Option<String>,
}
