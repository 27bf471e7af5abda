//! Canteen service API
//!
//! The request/response boundary consumed by the ordering engine. The HTTP
//! implementation lives in [`crate::http`]; tests substitute in-memory fakes.

use crate::ClientResult;
use async_trait::async_trait;
use shared::models::{
    Canteen, ChatAnswer, ChatRequest, Dish, DishId, LoginRequest, LoginResponse, Order,
    OrderCreate, OrderCreated, OrderId, OptionGroup, PaymentConfirmation, Rating, RatingCreate,
    RecommendedDish, RegisterRequest, UserId, UserRecord, WeeklyRecommendations,
};

/// Canteen service operations
#[async_trait]
pub trait CanteenApi: Send + Sync {
    // ========== Catalog ==========

    /// `GET /canteens`
    async fn list_canteens(&self) -> ClientResult<Vec<Canteen>>;

    /// `GET /canteens/{id}/dishes`
    async fn list_canteen_dishes(&self, canteen_id: i64) -> ClientResult<Vec<Dish>>;

    /// `GET /dishes/{id}`
    async fn get_dish(&self, dish_id: DishId) -> ClientResult<Dish>;

    /// `GET /options/dish/{id}`
    async fn list_dish_options(&self, dish_id: DishId) -> ClientResult<Vec<OptionGroup>>;

    /// `GET /ratings/dish/{id}`
    async fn list_dish_ratings(&self, dish_id: DishId) -> ClientResult<Vec<Rating>>;

    // ========== Orders ==========

    /// `POST /orders/`
    async fn create_order(&self, order: &OrderCreate) -> ClientResult<OrderCreated>;

    /// `POST /orders/{id}/pay`
    async fn pay_order(&self, order_id: OrderId) -> ClientResult<PaymentConfirmation>;

    /// `GET /orders?user_id=`
    async fn list_orders(&self, user_id: UserId) -> ClientResult<Vec<Order>>;

    // ========== Ratings ==========

    /// `POST /ratings/`
    async fn create_rating(&self, rating: &RatingCreate) -> ClientResult<Rating>;

    // ========== Auth ==========

    /// `POST /auth/login`
    async fn login(&self, request: &LoginRequest) -> ClientResult<LoginResponse>;

    /// `POST /auth/register`
    async fn register(&self, request: &RegisterRequest) -> ClientResult<UserRecord>;

    // ========== Assistant / Recommendations ==========

    /// `POST /chat`
    async fn chat(&self, request: &ChatRequest) -> ClientResult<ChatAnswer>;

    /// `GET /stats/daily-recommendations?weekday=&limit=`
    async fn daily_recommendations(&self, weekday: u8, limit: u32)
    -> ClientResult<Vec<RecommendedDish>>;

    /// `GET /stats/weekly-recommendations?limit_per_day=`
    async fn weekly_recommendations(&self, limit_per_day: u32)
    -> ClientResult<WeeklyRecommendations>;
}
