//! Secondary views: canteen tree, orders, recommendations, chat

use super::format::{format_date, format_score};
use crate::catalog::Stall;
use crate::i18n::LocalizationTable;
use crate::pricing::format_price;
use crate::state::{ChatEntry, ChatRole};
use rust_decimal::Decimal;
use shared::DisplayLanguage;
use shared::models::{Canteen, Order, OrderItem, RecommendedDish, WeeklyRecommendations};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanteenView {
    pub id: i64,
    pub name: String,
    pub location: Option<String>,
}

pub fn canteen_views(
    canteens: &[Canteen],
    lang: DisplayLanguage,
    table: &LocalizationTable,
) -> Vec<CanteenView> {
    canteens
        .iter()
        .map(|c| CanteenView {
            id: c.id,
            name: table.canteen(&c.name, lang).to_string(),
            location: c.location.clone().filter(|l| !l.trim().is_empty()),
        })
        .collect()
}

impl fmt::Display for CanteenView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.id, self.name)?;
        if let Some(location) = &self.location {
            write!(f, " ({location})")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StallView {
    pub title: String,
    pub dishes: Vec<StallDishView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StallDishView {
    pub id: i64,
    pub name: String,
    pub price: String,
}

pub fn stall_views(stalls: &[Stall], lang: DisplayLanguage, table: &LocalizationTable) -> Vec<StallView> {
    stalls
        .iter()
        .map(|stall| StallView {
            title: match &stall.category {
                Some(category) => table.category(category, lang).to_string(),
                None => table.ui("general_stall", lang).to_string(),
            },
            dishes: stall
                .dishes
                .iter()
                .map(|d| StallDishView {
                    id: d.id,
                    name: table.dish(&d.name, lang).to_string(),
                    price: format_price(d.base_price()),
                })
                .collect(),
        })
        .collect()
}

impl fmt::Display for StallView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  {}", self.title)?;
        for dish in &self.dishes {
            writeln!(f, "    #{} {}  {}", dish.id, dish.name, dish.price)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderView {
    pub id: i64,
    pub title: String,
    pub date: String,
    pub status: String,
    pub total: String,
    pub items: Vec<OrderItemView>,
    /// Label of the pay action for pending orders
    pub pay_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItemView {
    pub name: String,
    pub options: Option<String>,
    pub quantity: String,
    pub total: String,
}

pub fn order_views(orders: &[Order], lang: DisplayLanguage, table: &LocalizationTable) -> Vec<OrderView> {
    orders
        .iter()
        .map(|order| {
            let items_total: Decimal = order.items.iter().map(item_total).sum();
            let status_key = format!("status_{}", order.status.as_str());
            OrderView {
                id: order.id,
                title: format!("{} {}", table.ui("order_no", lang), order.id),
                date: format_date(&order.created_at),
                status: table.ui(&status_key, lang).to_string(),
                total: format_price(order.total_price.unwrap_or(items_total)),
                items: order
                    .items
                    .iter()
                    .map(|item| order_item_view(item, lang, table))
                    .collect(),
                pay_label: order
                    .is_payable()
                    .then(|| table.ui("pay_now", lang).to_string()),
            }
        })
        .collect()
}

fn item_total(item: &OrderItem) -> Decimal {
    item.price.unwrap_or(Decimal::ZERO) * Decimal::from(item.quantity)
}

fn order_item_view(item: &OrderItem, lang: DisplayLanguage, table: &LocalizationTable) -> OrderItemView {
    let options: Vec<String> = item
        .options
        .iter()
        .filter(|(_, value)| value.as_str() != shared::models::NOT_SELECTED)
        .map(|(option_type, value)| {
            format!(
                "{}: {}",
                table.option_name(option_type, lang),
                table.option_value(option_type, value, lang)
            )
        })
        .collect();
    OrderItemView {
        name: match &item.dish_name {
            Some(name) => table.dish(name, lang).to_string(),
            None => format!("#{}", item.dish_id),
        },
        options: (!options.is_empty()).then(|| options.join(", ")),
        quantity: format!("x {}", item.quantity),
        total: format_price(item_total(item)),
    }
}

impl fmt::Display for OrderView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}  {}  [{}]  {}", self.title, self.date, self.status, self.total)?;
        for item in &self.items {
            write!(f, "    {} {}  {}", item.name, item.quantity, item.total)?;
            match &item.options {
                Some(options) => writeln!(f, "  ({options})")?,
                None => writeln!(f)?,
            }
        }
        if let Some(label) = &self.pay_label {
            writeln!(f, "    -> {label}: pay {}", self.id)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationView {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub canteen: String,
    pub price: String,
    pub score: String,
    pub rating_count: i64,
}

pub fn recommendation_views(
    dishes: &[RecommendedDish],
    lang: DisplayLanguage,
    table: &LocalizationTable,
) -> Vec<RecommendationView> {
    dishes
        .iter()
        .map(|d| RecommendationView {
            id: d.id,
            name: table.dish(&d.name, lang).to_string(),
            category: match d.category.as_deref().filter(|c| !c.trim().is_empty()) {
                Some(category) => table.category(category, lang).to_string(),
                None => table.ui("general_stall", lang).to_string(),
            },
            canteen: d
                .canteen_name
                .as_deref()
                .map(|name| table.canteen(name, lang).to_string())
                .unwrap_or_default(),
            price: format_price(d.price.unwrap_or(Decimal::ZERO)),
            score: format_score(d.avg_score),
            rating_count: d.rating_count.unwrap_or(0),
        })
        .collect()
}

impl fmt::Display for RecommendationView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {}  {}  ★ {} ({})  {}",
            self.id, self.name, self.price, self.score, self.rating_count, self.category
        )?;
        if !self.canteen.is_empty() {
            write!(f, " @ {}", self.canteen)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayView {
    /// 0 = Monday
    pub weekday: u8,
    pub name: String,
    pub is_today: bool,
    pub dishes: Vec<RecommendationView>,
}

pub fn weekly_views(
    weekly: &WeeklyRecommendations,
    today: Option<u8>,
    lang: DisplayLanguage,
    table: &LocalizationTable,
) -> Vec<DayView> {
    weekly
        .iter()
        .map(|(weekday, day)| DayView {
            weekday: *weekday,
            name: lang.pick(&day.day_name_zh, &day.day_name_en).to_string(),
            is_today: today == Some(*weekday),
            dishes: recommendation_views(&day.dishes, lang, table),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatLineView {
    pub speaker: String,
    pub text: String,
}

/// Transcript lines; empty assistant answers show the "no response" string
pub fn chat_views(entries: &[ChatEntry], lang: DisplayLanguage, table: &LocalizationTable) -> Vec<ChatLineView> {
    entries
        .iter()
        .map(|entry| {
            let (speaker, empty) = match entry.role {
                ChatRole::User => ("you", ""),
                ChatRole::Assistant => ("assistant", "no_response"),
            };
            let text = if entry.text.trim().is_empty() && !empty.is_empty() {
                table.ui(empty, lang).to_string()
            } else {
                entry.text.clone()
            };
            ChatLineView {
                speaker: table.ui(speaker, lang).to_string(),
                text,
            }
        })
        .collect()
}

impl fmt::Display for ChatLineView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.speaker, self.text)
    }
}
