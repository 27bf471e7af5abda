//! HTTP client for network-based API calls

use crate::{CanteenApi, ClientConfig, ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use shared::models::{
    Canteen, ChatAnswer, ChatRequest, Dish, DishId, LoginRequest, LoginResponse, Order,
    OrderCreate, OrderCreated, OrderId, OptionGroup, PaymentConfirmation, Rating, RatingCreate,
    RecommendedDish, RegisterRequest, UserId, UserRecord, WeeklyRecommendations,
};
use std::time::Duration;

/// HTTP client for the canteen service
#[derive(Debug, Clone)]
pub struct HttpCanteenClient {
    client: Client,
    base_url: String,
}

impl HttpCanteenClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .map_err(|e| ClientError::Config(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        tracing::debug!(method = "GET", path, "request");
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(path, response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        tracing::debug!(method = "POST", path, "request");
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(path, response).await
    }

    /// Make a POST request without body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        tracing::debug!(method = "POST", path, "request");
        let response = self.client.post(self.url(path)).send().await?;
        Self::handle_response(path, response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(
        path: &str,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            // An unreadable body still yields the synthesized status line
            let body = response.text().await.unwrap_or_default();
            let err = ClientError::from_response(status, &body);
            tracing::warn!(path, status = status.as_u16(), error = %err, "request failed");
            return Err(err);
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(path, error = %e, "malformed response body");
            ClientError::InvalidResponse(e.to_string())
        })
    }
}

#[async_trait]
impl CanteenApi for HttpCanteenClient {
    async fn list_canteens(&self) -> ClientResult<Vec<Canteen>> {
        self.get("canteens").await
    }

    async fn list_canteen_dishes(&self, canteen_id: i64) -> ClientResult<Vec<Dish>> {
        self.get(&format!("canteens/{}/dishes", canteen_id)).await
    }

    async fn get_dish(&self, dish_id: DishId) -> ClientResult<Dish> {
        self.get(&format!("dishes/{}", dish_id)).await
    }

    async fn list_dish_options(&self, dish_id: DishId) -> ClientResult<Vec<OptionGroup>> {
        self.get(&format!("options/dish/{}", dish_id)).await
    }

    async fn list_dish_ratings(&self, dish_id: DishId) -> ClientResult<Vec<Rating>> {
        self.get(&format!("ratings/dish/{}", dish_id)).await
    }

    async fn create_order(&self, order: &OrderCreate) -> ClientResult<OrderCreated> {
        self.post("orders/", order).await
    }

    async fn pay_order(&self, order_id: OrderId) -> ClientResult<PaymentConfirmation> {
        self.post_empty(&format!("orders/{}/pay", order_id)).await
    }

    async fn list_orders(&self, user_id: UserId) -> ClientResult<Vec<Order>> {
        self.get(&format!("orders?user_id={}", user_id)).await
    }

    async fn create_rating(&self, rating: &RatingCreate) -> ClientResult<Rating> {
        self.post("ratings/", rating).await
    }

    async fn login(&self, request: &LoginRequest) -> ClientResult<LoginResponse> {
        self.post("auth/login", request).await
    }

    async fn register(&self, request: &RegisterRequest) -> ClientResult<UserRecord> {
        self.post("auth/register", request).await
    }

    async fn chat(&self, request: &ChatRequest) -> ClientResult<ChatAnswer> {
        self.post("chat", request).await
    }

    async fn daily_recommendations(
        &self,
        weekday: u8,
        limit: u32,
    ) -> ClientResult<Vec<RecommendedDish>> {
        self.get(&format!(
            "stats/daily-recommendations?weekday={}&limit={}",
            weekday, limit
        ))
        .await
    }

    async fn weekly_recommendations(
        &self,
        limit_per_day: u32,
    ) -> ClientResult<WeeklyRecommendations> {
        self.get(&format!(
            "stats/weekly-recommendations?limit_per_day={}",
            limit_per_day
        ))
        .await
    }
}
