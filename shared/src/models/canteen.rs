//! Canteen Model

use serde::{Deserialize, Serialize};

/// Canteen entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Canteen {
    pub id: i64,
    /// Canonical name, also the translation key
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}
