//! In-memory canteen service used by the session tests

#![allow(dead_code)]

use async_trait::async_trait;
use canteen_app::config::AppConfig;
use canteen_app::storage::{MemoryPreferenceStore, Preferences, UserIdentity};
use canteen_app::OrderingSession;
use canteen_client::{CanteenApi, ClientError, ClientResult};
use rust_decimal::Decimal;
use shared::models::{
    Canteen, ChatAnswer, ChatRequest, Dish, DishId, LoginRequest, LoginResponse, OptionGroup,
    OptionValue, Order, OrderCreate, OrderCreated, OrderId, OrderStatus, PaymentConfirmation,
    Rating, RatingCreate, RecommendedDish, RegisterRequest, UserId, UserRecord,
    WeeklyRecommendations,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const PASSWORD: &str = "secret1";

#[derive(Default)]
pub struct FakeApi {
    calls: Mutex<Vec<String>>,
    pub canteens: Vec<Canteen>,
    pub canteen_dishes: HashMap<i64, Vec<Dish>>,
    pub dishes: HashMap<DishId, Dish>,
    pub options: HashMap<DishId, Vec<OptionGroup>>,
    pub dish_delays: HashMap<DishId, Duration>,
    pub option_delays: HashMap<DishId, Duration>,
    pub rating_delays: HashMap<DishId, Duration>,
    pub ratings: Mutex<HashMap<DishId, Vec<Rating>>>,
    pub fail_ratings: bool,
    pub fail_options: bool,
    /// Non-2xx answer for order submission
    pub order_error: Option<(u16, String)>,
    pub orders: Mutex<Vec<Order>>,
    pub submitted: Mutex<Vec<OrderCreate>>,
}

impl FakeApi {
    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of calls whose name starts with `prefix`
    pub fn count(&self, prefix: &str) -> usize {
        self.calls().iter().filter(|c| c.starts_with(prefix)).count()
    }

    /// Register a dish with its option groups
    pub fn with_dish(mut self, dish: Dish, groups: Vec<OptionGroup>) -> Self {
        self.options.insert(dish.id, groups);
        self.dishes.insert(dish.id, dish);
        self
    }
}

fn api_error(status: u16, message: &str) -> ClientError {
    ClientError::Api {
        status,
        message: message.to_string(),
    }
}

#[async_trait]
impl CanteenApi for FakeApi {
    async fn list_canteens(&self) -> ClientResult<Vec<Canteen>> {
        self.record("list_canteens");
        Ok(self.canteens.clone())
    }

    async fn list_canteen_dishes(&self, canteen_id: i64) -> ClientResult<Vec<Dish>> {
        self.record(format!("list_canteen_dishes:{canteen_id}"));
        self.canteen_dishes
            .get(&canteen_id)
            .cloned()
            .ok_or_else(|| api_error(404, "Canteen not found"))
    }

    async fn get_dish(&self, dish_id: DishId) -> ClientResult<Dish> {
        self.record(format!("get_dish:{dish_id}"));
        if let Some(delay) = self.dish_delays.get(&dish_id) {
            tokio::time::sleep(*delay).await;
        }
        self.dishes
            .get(&dish_id)
            .cloned()
            .ok_or_else(|| api_error(404, "Dish not found"))
    }

    async fn list_dish_options(&self, dish_id: DishId) -> ClientResult<Vec<OptionGroup>> {
        self.record(format!("list_dish_options:{dish_id}"));
        if let Some(delay) = self.option_delays.get(&dish_id) {
            tokio::time::sleep(*delay).await;
        }
        if self.fail_options {
            return Err(api_error(500, "options unavailable"));
        }
        Ok(self.options.get(&dish_id).cloned().unwrap_or_default())
    }

    async fn list_dish_ratings(&self, dish_id: DishId) -> ClientResult<Vec<Rating>> {
        self.record(format!("list_dish_ratings:{dish_id}"));
        if let Some(delay) = self.rating_delays.get(&dish_id) {
            tokio::time::sleep(*delay).await;
        }
        if self.fail_ratings {
            return Err(api_error(503, "HTTP 503 Service Unavailable"));
        }
        Ok(self
            .ratings
            .lock()
            .unwrap()
            .get(&dish_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn create_order(&self, order: &OrderCreate) -> ClientResult<OrderCreated> {
        self.record("create_order");
        self.submitted.lock().unwrap().push(order.clone());
        if let Some((status, message)) = &self.order_error {
            return Err(api_error(*status, message));
        }
        let id = 100 + self.orders.lock().unwrap().len() as i64;
        self.orders.lock().unwrap().push(Order {
            id,
            user_id: order.user_id,
            total_price: Some(order.total_price),
            status: OrderStatus::Pending,
            created_at: "2024-05-01T12:00:00".into(),
            items: Vec::new(),
        });
        Ok(OrderCreated {
            id,
            user_id: order.user_id,
            total_price: order.total_price,
            status: OrderStatus::Pending,
            created_at: None,
        })
    }

    async fn pay_order(&self, order_id: OrderId) -> ClientResult<PaymentConfirmation> {
        self.record(format!("pay_order:{order_id}"));
        let mut orders = self.orders.lock().unwrap();
        let order = orders
            .iter_mut()
            .find(|o| o.id == order_id)
            .ok_or_else(|| api_error(404, "Order not found"))?;
        if order.status != OrderStatus::Pending {
            return Err(api_error(400, "Order already paid or cancelled"));
        }
        order.status = OrderStatus::Paid;
        Ok(PaymentConfirmation {
            message: "Payment successful".into(),
            order_id,
            status: OrderStatus::Paid,
        })
    }

    async fn list_orders(&self, user_id: UserId) -> ClientResult<Vec<Order>> {
        self.record(format!("list_orders:{user_id}"));
        Ok(self
            .orders
            .lock()
            .unwrap()
            .iter()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create_rating(&self, rating: &RatingCreate) -> ClientResult<Rating> {
        self.record("create_rating");
        let created = Rating {
            id: Some(1),
            user_id: Some(rating.user_id),
            dish_id: Some(rating.dish_id),
            score: rating.score,
            comment: rating.comment.clone(),
            username: Some("alice".into()),
            created_at: "2024-05-01T12:00:00".into(),
        };
        self.ratings
            .lock()
            .unwrap()
            .entry(rating.dish_id)
            .or_default()
            .push(created.clone());
        Ok(created)
    }

    async fn login(&self, request: &LoginRequest) -> ClientResult<LoginResponse> {
        self.record("login");
        if request.password != PASSWORD {
            return Err(api_error(401, "Invalid username or password"));
        }
        Ok(LoginResponse {
            user: UserRecord {
                id: 3,
                username: request.username.clone(),
                email: None,
                role: "student".into(),
                created_at: None,
            },
            message: "Login successful".into(),
        })
    }

    async fn register(&self, request: &RegisterRequest) -> ClientResult<UserRecord> {
        self.record(format!("register:{}", request.role));
        Ok(UserRecord {
            id: 42,
            username: request.username.clone(),
            email: request.email.clone(),
            role: request.role.clone(),
            created_at: None,
        })
    }

    async fn chat(&self, request: &ChatRequest) -> ClientResult<ChatAnswer> {
        self.record(format!("chat:{}", request.message));
        Ok(ChatAnswer {
            answer: "Try Mapo Tofu".into(),
        })
    }

    async fn daily_recommendations(
        &self,
        weekday: u8,
        limit: u32,
    ) -> ClientResult<Vec<RecommendedDish>> {
        self.record(format!("daily_recommendations:{weekday}:{limit}"));
        Ok(Vec::new())
    }

    async fn weekly_recommendations(
        &self,
        limit_per_day: u32,
    ) -> ClientResult<WeeklyRecommendations> {
        self.record(format!("weekly_recommendations:{limit_per_day}"));
        Ok(WeeklyRecommendations::new())
    }
}

// ========== Fixtures ==========

pub fn dish(id: DishId, name: &str, price: f64, category: Option<&str>) -> Dish {
    serde_json::from_value(serde_json::json!({
        "id": id, "canteen_id": 1, "name": name, "category": category, "price": price
    }))
    .unwrap()
}

pub fn egg_fried_rice() -> Dish {
    dish(1, "Egg Fried Rice", 10.0, Some("Rice Stall 1"))
}

pub fn milk_tea() -> Dish {
    dish(2, "Milk Tea", 8.0, Some("Drink Stall"))
}

fn value(value: &str, zh: &str, en: &str) -> OptionValue {
    OptionValue {
        value: value.into(),
        label_zh: zh.into(),
        label_en: en.into(),
    }
}

pub fn egg_group() -> OptionGroup {
    OptionGroup {
        id: Some(1),
        option_type: "add_egg".into(),
        option_name_zh: "加蛋".into(),
        option_name_en: "Add Egg".into(),
        option_values: vec![
            value("no", "不加", "No Egg"),
            value("yes", "加蛋 (+2元)", "Add Egg (+2元)"),
        ],
        is_required: false,
    }
}

pub fn spicy_group() -> OptionGroup {
    OptionGroup {
        id: Some(2),
        option_type: "spicy_level".into(),
        option_name_zh: "辣度".into(),
        option_name_en: "Spicy Level".into(),
        option_values: vec![
            value("mild", "微辣", "Mild"),
            value("medium", "中辣", "Medium"),
            value("hot", "重辣", "Hot"),
        ],
        is_required: true,
    }
}

pub fn sugar_group() -> OptionGroup {
    OptionGroup {
        id: Some(3),
        option_type: "sugar_level".into(),
        option_name_zh: "糖度".into(),
        option_name_en: "Sugar Level".into(),
        option_values: vec![
            value("no_sugar", "不额外加糖", "No Extra Sugar"),
            value("half", "五分糖", "50% Sugar"),
            value("full", "满糖 (+1元)", "Full Sugar (+¥1)"),
        ],
        is_required: false,
    }
}

/// Default catalog: rice with egg option, milk tea with sugar option
pub fn catalog() -> FakeApi {
    FakeApi::default()
        .with_dish(egg_fried_rice(), vec![egg_group()])
        .with_dish(milk_tea(), vec![sugar_group()])
}

pub fn alice() -> UserIdentity {
    UserIdentity {
        id: 3,
        username: "alice".into(),
    }
}

pub struct Harness {
    pub session: OrderingSession<FakeApi>,
    pub api: Arc<FakeApi>,
    pub store: Arc<MemoryPreferenceStore>,
}

pub fn harness(api: FakeApi, preferences: Preferences) -> Harness {
    harness_with_config(api, preferences, &AppConfig::default())
}

pub fn harness_with_config(api: FakeApi, preferences: Preferences, config: &AppConfig) -> Harness {
    let api = Arc::new(api);
    let store = Arc::new(MemoryPreferenceStore::new(preferences));
    let session = OrderingSession::new(api.clone(), store.clone(), config);
    Harness {
        session,
        api,
        store,
    }
}

/// Session with alice logged in
pub fn logged_in(api: FakeApi) -> Harness {
    harness(
        api,
        Preferences {
            language: None,
            user: Some(alice()),
        },
    )
}

pub fn dec(value: i64) -> Decimal {
    Decimal::from(value)
}
