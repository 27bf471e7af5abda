//! Order Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub type OrderId = i64;

/// Order item payload (one cart line)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItemInput {
    pub dish_id: i64,
    pub quantity: i64,
    /// Unit price including option surcharges
    pub price: Decimal,
    /// option_type -> value (never contains "no")
    pub options: BTreeMap<String, String>,
}

/// Create order payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCreate {
    pub user_id: i64,
    pub items: Vec<OrderItemInput>,
    pub total_price: Decimal,
}

/// Order status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Paid,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Paid => "paid",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Created order (response of order submission)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCreated {
    pub id: OrderId,
    pub user_id: i64,
    pub total_price: Decimal,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Order item as listed in order history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub dish_id: i64,
    #[serde(default)]
    pub dish_name: Option<String>,
    pub quantity: i64,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default, deserialize_with = "options_or_empty")]
    pub options: BTreeMap<String, String>,
}

/// Order with nested items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: i64,
    #[serde(default)]
    pub total_price: Option<Decimal>,
    #[serde(default)]
    pub status: OrderStatus,
    pub created_at: String,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

impl Order {
    pub fn is_payable(&self) -> bool {
        self.status == OrderStatus::Pending
    }
}

/// Payment confirmation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentConfirmation {
    #[serde(default)]
    pub message: String,
    pub order_id: OrderId,
    pub status: OrderStatus,
}

fn options_or_empty<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<BTreeMap<String, String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_list_row() {
        let json = r#"[{
            "id": 12, "user_id": 3, "total_price": 24.0, "status": "pending",
            "created_at": "2024-05-01T12:00:00",
            "items": [
                {"dish_id": 1, "dish_name": "Egg Fried Rice", "quantity": 2, "price": 12.0,
                 "options": {"add_egg": "yes"}},
                {"dish_id": 4, "dish_name": "Soy Milk", "quantity": 1, "price": 3.0, "options": null}
            ]
        }]"#;
        let orders: Vec<Order> = serde_json::from_str(json).unwrap();
        assert_eq!(orders.len(), 1);
        assert!(orders[0].is_payable());
        assert_eq!(orders[0].items[0].options["add_egg"], "yes");
        assert!(orders[0].items[1].options.is_empty());
    }

    #[test]
    fn test_unknown_status() {
        let status: OrderStatus = serde_json::from_str("\"refunded\"").unwrap();
        assert_eq!(status, OrderStatus::Unknown);
    }

    #[test]
    fn test_order_create_serializes_numbers() {
        let body = OrderCreate {
            user_id: 3,
            items: vec![OrderItemInput {
                dish_id: 1,
                quantity: 2,
                price: Decimal::new(12, 0),
                options: BTreeMap::from([("add_egg".to_string(), "yes".to_string())]),
            }],
            total_price: Decimal::new(24, 0),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["total_price"].as_f64(), Some(24.0));
        assert_eq!(value["items"][0]["price"].as_f64(), Some(12.0));
        assert_eq!(value["items"][0]["options"]["add_egg"], "yes");
    }
}
