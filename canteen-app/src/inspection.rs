//! Dish inspection state
//!
//! Holds the single open dish, its option groups and ratings, and the
//! user's explicit choices. Option and rating loads are tagged with a
//! [`LoadTicket`]; a result whose ticket no longer matches the open dish is
//! dropped, so a slow response can never overwrite a newer dish.

use crate::cart::{PricedSelection, Selection};
use crate::pricing::option_surcharge;
use rust_decimal::Decimal;
use shared::models::{Dish, DishId, NOT_SELECTED, OptionGroup, OptionValue, Rating};
use std::collections::BTreeMap;

/// Tag attached to every option / rating fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    pub dish_id: DishId,
    generation: u64,
}

/// Reservation for a dish whose details are still being fetched.
///
/// Only the most recent reservation may open its dish; any later `open`,
/// `begin_open` or `close` supersedes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingOpen {
    request: u64,
}

/// Progress of one independently loaded slice
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Slice<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    /// Load failed; holds the normalized message
    Failed(String),
}

impl<T> Slice<T> {
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Slice::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Slice::Loading)
    }
}

impl<T> From<Result<T, String>> for Slice<T> {
    fn from(result: Result<T, String>) -> Self {
        match result {
            Ok(value) => Slice::Loaded(value),
            Err(message) => Slice::Failed(message),
        }
    }
}

/// One group's resolved value
#[derive(Debug, Clone, Copy)]
pub struct ResolvedOption<'a> {
    pub group: &'a OptionGroup,
    pub value: &'a OptionValue,
    /// Chosen by the user rather than defaulted
    pub explicit: bool,
}

#[derive(Debug, Clone, Default)]
pub struct DishInspection {
    /// Bumped by every open/close request, including unresolved lookups
    request: u64,
    generation: u64,
    dish: Option<Dish>,
    options: Slice<Vec<OptionGroup>>,
    ratings: Slice<Vec<Rating>>,
    /// Explicit choices, keyed by option_type (may hold "no")
    choices: BTreeMap<String, String>,
}

impl DishInspection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `dish` the open dish, replacing any previous one.
    ///
    /// Returns the ticket the option and rating loads must carry.
    pub fn open(&mut self, dish: Dish) -> LoadTicket {
        self.request += 1;
        self.install(dish)
    }

    /// Reserve the next open before the dish itself is known
    pub fn begin_open(&mut self) -> PendingOpen {
        self.request += 1;
        PendingOpen {
            request: self.request,
        }
    }

    /// Whether `pending` is still the most recent open request
    pub fn is_latest(&self, pending: &PendingOpen) -> bool {
        pending.request == self.request
    }

    /// Open the fetched dish, unless a newer request came in meanwhile
    pub fn complete_open(&mut self, pending: PendingOpen, dish: Dish) -> Option<LoadTicket> {
        if !self.is_latest(&pending) {
            tracing::debug!(dish_id = dish.id, "Discarding stale dish lookup");
            return None;
        }
        Some(self.install(dish))
    }

    fn install(&mut self, dish: Dish) -> LoadTicket {
        self.generation += 1;
        let ticket = LoadTicket {
            dish_id: dish.id,
            generation: self.generation,
        };
        tracing::debug!(dish_id = dish.id, generation = self.generation, "Dish opened");
        self.dish = Some(dish);
        self.options = Slice::Loading;
        self.ratings = Slice::Loading;
        self.choices.clear();
        ticket
    }

    pub fn close(&mut self) {
        self.request += 1;
        self.generation += 1;
        self.dish = None;
        self.options = Slice::Idle;
        self.ratings = Slice::Idle;
        self.choices.clear();
    }

    pub fn dish(&self) -> Option<&Dish> {
        self.dish.as_ref()
    }

    pub fn options(&self) -> &Slice<Vec<OptionGroup>> {
        &self.options
    }

    pub fn ratings(&self) -> &Slice<Vec<Rating>> {
        &self.ratings
    }

    /// Whether a result carrying `ticket` still belongs to the open dish
    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        ticket.generation == self.generation
            && self.dish.as_ref().is_some_and(|d| d.id == ticket.dish_id)
    }

    /// Ticket for re-fetching the open dish's ratings
    pub fn ratings_ticket(&self) -> Option<LoadTicket> {
        self.dish.as_ref().map(|d| LoadTicket {
            dish_id: d.id,
            generation: self.generation,
        })
    }

    /// Apply an option load; stale results are discarded.
    pub fn apply_options(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<OptionGroup>, String>,
    ) -> bool {
        if !self.is_current(&ticket) {
            tracing::debug!(dish_id = ticket.dish_id, "Discarding stale option response");
            return false;
        }
        self.options = result.into();
        // Choices made before the groups arrived may no longer be valid
        if let Slice::Loaded(groups) = &self.options {
            self.choices
                .retain(|t, v| groups.iter().any(|g| g.option_type == *t && g.declares(v)));
        }
        true
    }

    /// Apply a ratings load; stale results are discarded.
    pub fn apply_ratings(&mut self, ticket: LoadTicket, result: Result<Vec<Rating>, String>) -> bool {
        if !self.is_current(&ticket) {
            tracing::debug!(dish_id = ticket.dish_id, "Discarding stale ratings response");
            return false;
        }
        self.ratings = result.into();
        true
    }

    /// Record a choice. Unknown groups or undeclared values are ignored.
    pub fn select_option(&mut self, option_type: &str, value: &str) -> bool {
        let valid = self
            .groups()
            .iter()
            .any(|g| g.option_type == option_type && g.declares(value));
        if valid {
            self.choices.insert(option_type.to_string(), value.to_string());
        } else {
            tracing::debug!(option_type, value, "Ignoring undeclared option value");
        }
        valid
    }

    /// Resolved value for every group with at least one declared value.
    ///
    /// Precedence: explicit choice, then first value of a required group,
    /// then `"no"` when declared, then the first value.
    pub fn resolve_selection(&self) -> Vec<ResolvedOption<'_>> {
        self.groups()
            .iter()
            .filter_map(|group| {
                if let Some(value) = self
                    .choices
                    .get(&group.option_type)
                    .and_then(|v| group.value(v))
                {
                    return Some(ResolvedOption {
                        group,
                        value,
                        explicit: true,
                    });
                }
                let first = group.option_values.first()?;
                let value = if group.is_required {
                    first
                } else {
                    group.value(NOT_SELECTED).unwrap_or(first)
                };
                Some(ResolvedOption {
                    group,
                    value,
                    explicit: false,
                })
            })
            .collect()
    }

    /// Resolved selection without `"no"` values, with its surcharge
    pub fn priced_selection(&self) -> PricedSelection {
        let mut selection = Selection::new();
        let mut extra_price = Decimal::ZERO;
        for resolved in self.resolve_selection() {
            if resolved.value.is_not_selected() {
                continue;
            }
            selection.insert(&resolved.group.option_type, &resolved.value.value);
            extra_price += option_surcharge(resolved.value);
        }
        PricedSelection {
            selection,
            extra_price,
        }
    }

    /// Base price plus the surcharge of every selected value
    pub fn current_total_unit_price(&self) -> Option<Decimal> {
        let dish = self.dish.as_ref()?;
        Some(dish.base_price() + self.priced_selection().extra_price)
    }

    fn groups(&self) -> &[OptionGroup] {
        self.options.loaded().map(Vec::as_slice).unwrap_or(&[])
    }
}
