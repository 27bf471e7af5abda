//! Per-canteen dish cache and stall grouping

use shared::models::Dish;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Dishes of one stall (category)
#[derive(Debug, Clone, PartialEq)]
pub struct Stall {
    /// Category name; `None` for the general stall
    pub category: Option<String>,
    pub dishes: Vec<Dish>,
}

/// Group dishes by category, keeping first-appearance order.
///
/// Dishes without a (non-blank) category share one general stall.
pub fn group_into_stalls(dishes: &[Dish]) -> Vec<Stall> {
    let mut stalls: Vec<Stall> = Vec::new();
    for dish in dishes {
        let category = dish
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty());
        match stalls.iter_mut().find(|s| s.category.as_deref() == category) {
            Some(stall) => stall.dishes.push(dish.clone()),
            None => stalls.push(Stall {
                category: category.map(str::to_string),
                dishes: vec![dish.clone()],
            }),
        }
    }
    stalls
}

#[derive(Debug, Clone)]
struct CacheEntry {
    dishes: Vec<Dish>,
    fetched_at: Instant,
}

/// Dish lists keyed by canteen id.
///
/// Without a TTL entries live until invalidated. Only successful fetches
/// are ever inserted.
#[derive(Debug, Clone, Default)]
pub struct CatalogCache {
    ttl: Option<Duration>,
    entries: HashMap<i64, CacheEntry>,
}

impl CatalogCache {
    pub fn new(ttl: Option<Duration>) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, canteen_id: i64) -> Option<&[Dish]> {
        self.get_at(canteen_id, Instant::now())
    }

    /// Lookup as of `now`; expired entries are treated as missing
    pub fn get_at(&self, canteen_id: i64, now: Instant) -> Option<&[Dish]> {
        let entry = self.entries.get(&canteen_id)?;
        if let Some(ttl) = self.ttl {
            if now.saturating_duration_since(entry.fetched_at) >= ttl {
                tracing::debug!(canteen_id, "Catalog cache entry expired");
                return None;
            }
        }
        Some(&entry.dishes)
    }

    pub fn insert(&mut self, canteen_id: i64, dishes: Vec<Dish>) {
        self.entries.insert(
            canteen_id,
            CacheEntry {
                dishes,
                fetched_at: Instant::now(),
            },
        );
    }

    /// Drop one canteen's entry; returns whether one existed
    pub fn invalidate(&mut self, canteen_id: i64) -> bool {
        self.entries.remove(&canteen_id).is_some()
    }

    pub fn invalidate_all(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
