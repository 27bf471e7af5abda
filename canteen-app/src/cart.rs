//! Cart model
//!
//! Ordered cart lines, merged by fingerprint `(dish id, canonical options)`.
//! Prices are frozen on the line at merge time; the cart total and the
//! submitted order are both derived from those stored figures.

use crate::error::{OrderingError, OrderingResult};
use crate::pricing::round_money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::{Dish, DishId, NOT_SELECTED, OrderCreate, OrderItemInput, UserId};
use std::collections::BTreeMap;

/// Maximum allowed quantity per line
pub const MAX_QUANTITY: u32 = 9999;

/// Chosen option values keyed by `option_type`
///
/// `"no"` values never enter a selection. The map is ordered, so its
/// compact JSON form is canonical.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection(BTreeMap<String, String>);

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a choice; `"no"` removes any previous choice for the group
    pub fn insert(&mut self, option_type: impl Into<String>, value: impl Into<String>) {
        let option_type = option_type.into();
        let value = value.into();
        if value == NOT_SELECTED {
            self.0.remove(&option_type);
        } else {
            self.0.insert(option_type, value);
        }
    }

    pub fn get(&self, option_type: &str) -> Option<&str> {
        self.0.get(option_type).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Compact JSON, e.g. `{"add_egg":"yes","spicy_level":"mild"}`
    pub fn canonical(&self) -> String {
        // BTreeMap<String, String> always serializes
        serde_json::to_string(&self.0).unwrap_or_default()
    }

    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.0
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Selection {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut selection = Selection::new();
        for (k, v) in iter {
            selection.insert(k, v);
        }
        selection
    }
}

/// Line identity
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    pub dish_id: DishId,
    pub options: String,
}

/// A selection with its surcharge already summed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PricedSelection {
    pub selection: Selection,
    pub extra_price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub dish_id: DishId,
    /// Canonical dish name (translated at render time)
    pub dish_name: String,
    pub quantity: u32,
    pub options: Selection,
    pub base_price: Decimal,
    pub extra_price: Decimal,
}

impl CartLine {
    pub fn total_unit_price(&self) -> Decimal {
        self.base_price + self.extra_price
    }

    pub fn line_total(&self) -> Decimal {
        self.total_unit_price() * Decimal::from(self.quantity)
    }

    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint {
            dish_id: self.dish_id,
            options: self.options.canonical(),
        }
    }
}

/// Validate a requested quantity
fn checked_quantity(quantity: i64) -> OrderingResult<u32> {
    if quantity <= 0 {
        return Err(OrderingError::Validation(format!(
            "quantity must be positive, got {quantity}"
        )));
    }
    u32::try_from(quantity)
        .ok()
        .filter(|q| *q <= MAX_QUANTITY)
        .ok_or_else(|| {
            OrderingError::Validation(format!(
                "quantity exceeds maximum allowed ({MAX_QUANTITY}), got {quantity}"
            ))
        })
}

/// Parse user-entered quantity text ("2", " 3 ")
///
/// Non-integer, zero and negative input is a validation error.
pub fn parse_quantity(input: &str) -> OrderingResult<i64> {
    let trimmed = input.trim();
    let quantity: i64 = trimmed
        .parse()
        .map_err(|_| OrderingError::Validation(format!("invalid quantity: {trimmed:?}")))?;
    checked_quantity(quantity)?;
    Ok(quantity)
}

#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
    /// Bumped on every mutation
    revision: u64,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Add `quantity` of `dish` with a priced selection.
    ///
    /// An existing line with the same fingerprint gains the quantity and
    /// takes the freshly computed prices; otherwise a line is appended.
    /// Returns the index of the affected line.
    pub fn add_line(
        &mut self,
        dish: &Dish,
        quantity: i64,
        priced: PricedSelection,
    ) -> OrderingResult<usize> {
        let quantity = checked_quantity(quantity)?;
        let base_price = dish.base_price();
        let extra_price = priced.extra_price.max(Decimal::ZERO);
        let fingerprint = Fingerprint {
            dish_id: dish.id,
            options: priced.selection.canonical(),
        };

        if let Some(index) = self.position(&fingerprint) {
            let existing = &mut self.lines[index];
            let merged = existing
                .quantity
                .checked_add(quantity)
                .filter(|q| *q <= MAX_QUANTITY)
                .ok_or_else(|| {
                    OrderingError::Validation(format!(
                        "quantity exceeds maximum allowed ({MAX_QUANTITY})"
                    ))
                })?;
            existing.quantity = merged;
            existing.base_price = base_price;
            existing.extra_price = extra_price;
            existing.dish_name = dish.name.clone();
            self.revision += 1;
            tracing::debug!(dish_id = dish.id, quantity = merged, "Cart line merged");
            return Ok(index);
        }

        self.lines.push(CartLine {
            dish_id: dish.id,
            dish_name: dish.name.clone(),
            quantity,
            options: priced.selection,
            base_price,
            extra_price,
        });
        self.revision += 1;
        tracing::debug!(dish_id = dish.id, quantity, "Cart line added");
        Ok(self.lines.len() - 1)
    }

    /// Remove by position; out-of-range is a no-op
    pub fn remove_line(&mut self, index: usize) -> Option<CartLine> {
        if index >= self.lines.len() {
            return None;
        }
        self.revision += 1;
        Some(self.lines.remove(index))
    }

    /// Σ(total unit price × quantity), rounded to 2 dp
    pub fn total(&self) -> Decimal {
        round_money(self.lines.iter().map(CartLine::line_total).sum())
    }

    /// Total number of items across lines
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    pub fn clear(&mut self) {
        if !self.lines.is_empty() {
            self.lines.clear();
            self.revision += 1;
        }
    }

    /// Take the submitted quantities out of the cart.
    ///
    /// Used when the cart changed while an order was in flight: only what
    /// was actually ordered is removed.
    pub fn settle(&mut self, submitted: &[CartLine]) {
        for line in submitted {
            let fingerprint = line.fingerprint();
            if let Some(index) = self.position(&fingerprint) {
                let existing = &mut self.lines[index];
                if existing.quantity <= line.quantity {
                    self.lines.remove(index);
                } else {
                    existing.quantity -= line.quantity;
                }
            }
        }
        self.revision += 1;
    }

    /// Build the order request from the stored lines.
    ///
    /// `total_price` is exactly [`Cart::total`].
    pub fn to_order_request(&self, user_id: UserId) -> OrderCreate {
        OrderCreate {
            user_id,
            items: self
                .lines
                .iter()
                .map(|line| OrderItemInput {
                    dish_id: line.dish_id,
                    quantity: i64::from(line.quantity),
                    price: line.total_unit_price(),
                    options: line.options.as_map().clone(),
                })
                .collect(),
            total_price: self.total(),
        }
    }

    fn position(&self, fingerprint: &Fingerprint) -> Option<usize> {
        self.lines.iter().position(|l| &l.fingerprint() == fingerprint)
    }
}
