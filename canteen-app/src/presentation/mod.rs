//! Presentation synchronizer
//!
//! [`render`] is a pure function of the application state, the display
//! language and the localization table. It never mutates state, so calling
//! it again (or after a language round-trip) yields identical output.

mod format;
mod views;

pub use format::{format_calories, format_date, format_score};
pub use views::{
    CanteenView, ChatLineView, DayView, OrderItemView, OrderView, RecommendationView,
    StallDishView, StallView, canteen_views, chat_views, order_views, recommendation_views,
    stall_views, weekly_views,
};

use crate::cart::{Cart, CartLine};
use crate::i18n::LocalizationTable;
use crate::inspection::{DishInspection, Slice};
use crate::pricing::{format_price, option_surcharge};
use crate::state::AppState;
use shared::DisplayLanguage;
use shared::models::{Dish, Rating};
use std::fmt;

/// Everything visible on the ordering page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub html_lang: &'static str,
    pub chrome: Chrome,
    /// `None` shows the select hint
    pub dish: Option<DishPanel>,
    pub select_hint: String,
    pub cart: CartPanel,
}

/// Navigation and header strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chrome {
    pub nav_menu: String,
    pub nav_rec: String,
    pub nav_order: String,
    pub header_menu: String,
    pub chat_title: String,
    pub language_button: String,
    /// Username, or the "not logged in" string
    pub account: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DishPanel {
    pub dish_id: i64,
    pub name: String,
    pub category: String,
    pub price: String,
    pub calories: String,
    pub ingredients: String,
    /// Base price plus selected surcharges
    pub unit_price: String,
    pub options_title: String,
    /// Shown while option groups are loading
    pub options_status: Option<String>,
    pub groups: Vec<OptionGroupView>,
    pub ratings_title: String,
    pub ratings: RatingsView,
    pub add_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionGroupView {
    pub option_type: String,
    pub title: String,
    pub required: bool,
    pub values: Vec<OptionValueView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionValueView {
    pub value: String,
    pub label: String,
    /// Formatted surcharge, when the value carries one
    pub surcharge: Option<String>,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RatingsView {
    Loading(String),
    Failed(String),
    Empty(String),
    List(Vec<RatingView>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingView {
    pub score: i32,
    pub username: String,
    pub date: String,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartPanel {
    pub title: String,
    pub lines: Vec<CartLineView>,
    pub empty_message: Option<String>,
    pub total_label: String,
    pub total: String,
    pub item_count: u64,
    pub checkout_label: String,
    pub checkout_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineView {
    pub index: usize,
    pub name: String,
    /// `name: label` pairs joined by `, `
    pub options: Option<String>,
    pub quantity: String,
    pub total: String,
}

/// Render the whole page
pub fn render(state: &AppState, lang: DisplayLanguage, table: &LocalizationTable) -> Screen {
    Screen {
        html_lang: lang.html_lang(),
        chrome: render_chrome(state, lang, table),
        dish: render_dish(&state.inspection, lang, table),
        select_hint: table.ui("select_hint", lang).to_string(),
        cart: render_cart(&state.cart, lang, table),
    }
}

pub fn render_chrome(state: &AppState, lang: DisplayLanguage, table: &LocalizationTable) -> Chrome {
    let ui = |key: &'static str| table.ui(key, lang).to_string();
    Chrome {
        nav_menu: ui("nav_menu"),
        nav_rec: ui("nav_rec"),
        nav_order: ui("nav_order"),
        header_menu: ui("header_menu"),
        chat_title: ui("chat_title"),
        language_button: ui("lang_btn"),
        account: state
            .user
            .as_ref()
            .map(|u| u.username.clone())
            .unwrap_or_else(|| ui("not_logged_in")),
    }
}

/// Dish panel, or `None` when no dish is open
pub fn render_dish(
    inspection: &DishInspection,
    lang: DisplayLanguage,
    table: &LocalizationTable,
) -> Option<DishPanel> {
    let dish = inspection.dish()?;
    let ui = |key: &'static str| table.ui(key, lang).to_string();

    let resolved = inspection.resolve_selection();
    let groups = resolved
        .iter()
        .map(|r| OptionGroupView {
            option_type: r.group.option_type.clone(),
            title: r.group.name(lang).to_string(),
            required: r.group.is_required,
            values: r
                .group
                .option_values
                .iter()
                .map(|v| {
                    let surcharge = option_surcharge(v);
                    OptionValueView {
                        value: v.value.clone(),
                        label: v.label(lang).to_string(),
                        surcharge: (!surcharge.is_zero()).then(|| format!("+{}", format_price(surcharge))),
                        selected: v.value == r.value.value,
                    }
                })
                .collect(),
        })
        .collect();

    let ratings = match inspection.ratings() {
        Slice::Idle | Slice::Loading => RatingsView::Loading(ui("loading")),
        Slice::Failed(_) => RatingsView::Failed(ui("error_loading")),
        Slice::Loaded(list) if list.is_empty() => RatingsView::Empty(ui("no_ratings")),
        Slice::Loaded(list) => RatingsView::List(
            list.iter()
                .map(|r| render_rating(r, lang, table))
                .collect(),
        ),
    };

    let unit_price = inspection
        .current_total_unit_price()
        .unwrap_or_else(|| dish.base_price());

    Some(DishPanel {
        dish_id: dish.id,
        name: table.dish(&dish.name, lang).to_string(),
        category: match dish.category.as_deref().filter(|c| !c.trim().is_empty()) {
            Some(category) => table.category(category, lang).to_string(),
            None => ui("general_stall"),
        },
        price: format_price(dish.base_price()),
        calories: format_calories(dish.calories, lang, table),
        ingredients: ingredients(dish, lang, table),
        unit_price: format_price(unit_price),
        options_title: ui("customize_options"),
        options_status: inspection.options().is_loading().then(|| ui("loading")),
        groups,
        ratings_title: ui("ratings_title"),
        ratings,
        add_label: ui("btn_add"),
    })
}

fn ingredients(dish: &Dish, lang: DisplayLanguage, table: &LocalizationTable) -> String {
    let non_empty = |s: &Option<String>| s.as_deref().map(str::trim).filter(|s| !s.is_empty()).map(str::to_string);
    let localized = match lang {
        DisplayLanguage::Zh => non_empty(&dish.ingredients_zh),
        DisplayLanguage::En => None,
    };
    localized
        .or_else(|| non_empty(&dish.ingredients))
        .unwrap_or_else(|| table.ui("no_ingredients", lang).to_string())
}

fn render_rating(rating: &Rating, lang: DisplayLanguage, table: &LocalizationTable) -> RatingView {
    RatingView {
        score: rating.score,
        username: rating
            .username
            .as_deref()
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| table.ui("user", lang))
            .to_string(),
        date: format_date(&rating.created_at),
        comment: rating.comment.clone().filter(|c| !c.trim().is_empty()),
    }
}

/// Cart panel
pub fn render_cart(cart: &Cart, lang: DisplayLanguage, table: &LocalizationTable) -> CartPanel {
    let ui = |key: &'static str| table.ui(key, lang).to_string();
    let lines: Vec<CartLineView> = cart
        .lines()
        .iter()
        .enumerate()
        .map(|(index, line)| render_line(index, line, lang, table))
        .collect();

    CartPanel {
        title: ui("header_cart"),
        empty_message: lines.is_empty().then(|| ui("cart_empty")),
        checkout_enabled: !lines.is_empty(),
        lines,
        total_label: ui("total"),
        total: format_price(cart.total()),
        item_count: cart.item_count(),
        checkout_label: ui("btn_checkout"),
    }
}

fn render_line(
    index: usize,
    line: &CartLine,
    lang: DisplayLanguage,
    table: &LocalizationTable,
) -> CartLineView {
    let options: Vec<String> = line
        .options
        .iter()
        .map(|(option_type, value)| {
            format!(
                "{}: {}",
                table.option_name(option_type, lang),
                table.option_value(option_type, value, lang)
            )
        })
        .collect();

    CartLineView {
        index,
        name: table.dish(&line.dish_name, lang).to_string(),
        options: (!options.is_empty()).then(|| options.join(", ")),
        quantity: format!("x {}", line.quantity),
        total: format_price(line.line_total()),
    }
}

// ============ Terminal output ============

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.dish {
            Some(dish) => writeln!(f, "{dish}")?,
            None => writeln!(f, "{}\n", self.select_hint)?,
        }
        write!(f, "{}", self.cart)
    }
}

impl fmt::Display for DishPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ({}) #{} ==", self.name, self.category, self.dish_id)?;
        writeln!(f, "{}  |  {}", self.price, self.calories)?;
        writeln!(f, "{}", self.ingredients)?;

        if let Some(status) = &self.options_status {
            writeln!(f, "{}: {status}", self.options_title)?;
        } else if !self.groups.is_empty() {
            writeln!(f, "{}:", self.options_title)?;
            for group in &self.groups {
                let marker = if group.required { " *" } else { "" };
                writeln!(f, "  {}{marker} [{}]", group.title, group.option_type)?;
                for value in &group.values {
                    let mark = if value.selected { "(*)" } else { "( )" };
                    let surcharge = value.surcharge.as_deref().unwrap_or("");
                    writeln!(f, "    {mark} {} [{}] {surcharge}", value.label, value.value)?;
                }
            }
        }
        writeln!(f, "= {}", self.unit_price)?;

        writeln!(f, "{}:", self.ratings_title)?;
        match &self.ratings {
            RatingsView::Loading(text) | RatingsView::Failed(text) | RatingsView::Empty(text) => {
                writeln!(f, "  {text}")
            }
            RatingsView::List(list) => {
                for rating in list {
                    writeln!(f, "  ★ {} {} {}", rating.score, rating.username, rating.date)?;
                    if let Some(comment) = &rating.comment {
                        writeln!(f, "    {comment}")?;
                    }
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for CartPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ({}) ==", self.title, self.item_count)?;
        if let Some(empty) = &self.empty_message {
            writeln!(f, "  {empty}")?;
        }
        for line in &self.lines {
            writeln!(f, "  [{}] {} {}  {}", line.index + 1, line.name, line.quantity, line.total)?;
            if let Some(options) = &line.options {
                writeln!(f, "      {options}")?;
            }
        }
        writeln!(f, "{}: {}", self.total_label, self.total)
    }
}
