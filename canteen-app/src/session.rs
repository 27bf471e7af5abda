//! OrderingSession - 点单会话
//!
//! Event handlers for the ordering page. Each handler validates locally,
//! releases the state lock before any network call and applies the response
//! all-or-nothing once it arrives. A failed call leaves cart and inspection
//! state untouched.

use crate::cart::CartLine;
use crate::catalog::{CatalogCache, Stall, group_into_stalls};
use crate::config::AppConfig;
use crate::error::{OrderingError, OrderingResult};
use crate::i18n::LocalizationTable;
use crate::inspection::LoadTicket;
use crate::presentation::{self, Screen};
use crate::state::{AppState, ChatEntry, ChatRole, ExpandedCanteen, SharedState};
use crate::storage::{PreferenceStore, Preferences, UserIdentity};
use canteen_client::CanteenApi;
use chrono::Datelike;
use shared::DisplayLanguage;
use shared::models::{
    Canteen, ChatRequest, DishRef, LoginRequest, Order, OrderCreated, OrderId, OrderStatus,
    PaymentConfirmation, Rating, RatingCreate, RecommendedDish, RegisterRequest,
    WeeklyRecommendations,
};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LEN: usize = 6;

/// Role assigned to self-registered users
const REGISTER_ROLE: &str = "student";

/// 点单会话
pub struct OrderingSession<A: CanteenApi> {
    api: Arc<A>,
    state: SharedState,
    catalog: RwLock<CatalogCache>,
    store: Arc<dyn PreferenceStore>,
    table: Arc<LocalizationTable>,
}

impl<A: CanteenApi> OrderingSession<A> {
    /// Start a session, reading stored preferences once
    pub fn new(api: Arc<A>, store: Arc<dyn PreferenceStore>, config: &AppConfig) -> Self {
        let preferences = store.load();
        let language = preferences.language.unwrap_or(config.default_language);
        tracing::info!(
            language = %language,
            user = preferences.user.as_ref().map(|u| u.username.as_str()).unwrap_or("-"),
            "Ordering session started"
        );

        Self {
            api,
            state: AppState::new(language, preferences.user).into_shared(),
            catalog: RwLock::new(CatalogCache::new(config.cache_ttl())),
            store,
            table: Arc::new(LocalizationTable::builtin()),
        }
    }

    /// Replace the localization table
    pub fn with_table(mut self, table: LocalizationTable) -> Self {
        self.table = Arc::new(table);
        self
    }

    pub fn state(&self) -> SharedState {
        self.state.clone()
    }

    pub fn table(&self) -> &LocalizationTable {
        &self.table
    }

    pub async fn language(&self) -> DisplayLanguage {
        self.state.read().await.language
    }

    pub async fn user(&self) -> Option<UserIdentity> {
        self.state.read().await.user.clone()
    }

    /// Render the ordering page in the active language
    pub async fn render(&self) -> Screen {
        let state = self.state.read().await;
        presentation::render(&state, state.language, &self.table)
    }

    // ============ Language ============

    /// Switch to the other language; only label resolution changes
    pub async fn toggle_language(&self) -> DisplayLanguage {
        let current = self.language().await;
        self.set_language(current.toggled()).await;
        current.toggled()
    }

    pub async fn set_language(&self, language: DisplayLanguage) {
        let mut state = self.state.write().await;
        state.language = language;
        self.persist(&state);
        tracing::info!(language = %language, "Display language switched");
    }

    // ============ Catalog ============

    /// `GET /canteens`
    pub async fn load_canteens(&self) -> OrderingResult<Vec<Canteen>> {
        let canteens = self.api.list_canteens().await?;
        self.state.write().await.canteens = canteens.clone();
        Ok(canteens)
    }

    /// Dishes of one canteen grouped into stalls, served from the cache
    /// when possible.
    pub async fn expand_canteen(&self, canteen_id: i64) -> OrderingResult<Vec<Stall>> {
        let cached = self
            .catalog
            .read()
            .await
            .get(canteen_id)
            .map(<[_]>::to_vec);

        let dishes = match cached {
            Some(dishes) => {
                tracing::debug!(canteen_id, "Catalog cache hit");
                dishes
            }
            None => {
                let dishes = self.api.list_canteen_dishes(canteen_id).await?;
                self.catalog.write().await.insert(canteen_id, dishes.clone());
                dishes
            }
        };

        let stalls = group_into_stalls(&dishes);
        self.state.write().await.expanded = Some(ExpandedCanteen {
            canteen_id,
            stalls: stalls.clone(),
        });
        Ok(stalls)
    }

    /// Drop cached dish lists (one canteen, or all with `None`)
    pub async fn invalidate_catalog(&self, canteen_id: Option<i64>) {
        let mut catalog = self.catalog.write().await;
        match canteen_id {
            Some(id) => {
                catalog.invalidate(id);
            }
            None => catalog.invalidate_all(),
        }
    }

    // ============ Dish inspection ============

    /// Open a dish and load its options and ratings.
    ///
    /// A bare identifier is resolved through `GET /dishes/{id}` first; an
    /// unknown id fails with `NotFound` and leaves the open dish as it was.
    /// A lookup overtaken by a newer open (or a close) is dropped and yields
    /// `Ok(None)`. Options and ratings load concurrently; each slice is
    /// applied as soon as its own response arrives.
    pub async fn open_dish(&self, dish: impl Into<DishRef>) -> OrderingResult<Option<LoadTicket>> {
        let ticket = match dish.into() {
            DishRef::Full(dish) => self.state.write().await.inspection.open(*dish),
            DishRef::Id(dish_id) => {
                let pending = self.state.write().await.inspection.begin_open();
                let result = self.api.get_dish(dish_id).await;

                let mut state = self.state.write().await;
                if !state.inspection.is_latest(&pending) {
                    tracing::debug!(dish_id, "Dish lookup overtaken by a newer open");
                    return Ok(None);
                }
                match state.inspection.complete_open(pending, result?) {
                    Some(ticket) => ticket,
                    None => return Ok(None),
                }
            }
        };
        let dish_id = ticket.dish_id;

        let load_options = async {
            let options = self.api.list_dish_options(dish_id).await.map_err(|e| {
                tracing::warn!(dish_id, error = %e, "Failed to load dish options");
                e.message()
            });
            self.state
                .write()
                .await
                .inspection
                .apply_options(ticket, options);
        };
        let load_ratings = async {
            let ratings = self.api.list_dish_ratings(dish_id).await.map_err(|e| {
                tracing::warn!(dish_id, error = %e, "Failed to load dish ratings");
                e.message()
            });
            self.state
                .write()
                .await
                .inspection
                .apply_ratings(ticket, ratings);
        };
        tokio::join!(load_options, load_ratings);

        Ok(Some(ticket))
    }

    /// Record an option choice; undeclared values are ignored
    pub async fn select_option(&self, option_type: &str, value: &str) -> bool {
        self.state
            .write()
            .await
            .inspection
            .select_option(option_type, value)
    }

    pub async fn close_dish(&self) {
        self.state.write().await.inspection.close();
    }

    // ============ Cart ============

    /// Add the open dish with its resolved selection.
    ///
    /// Returns the index of the affected cart line.
    pub async fn add_to_cart(&self, quantity: i64) -> OrderingResult<usize> {
        let mut guard = self.state.write().await;
        let state = &mut *guard;

        let dish = state
            .inspection
            .dish()
            .cloned()
            .ok_or_else(|| OrderingError::validation("No dish selected"))?;
        if state.inspection.options().is_loading() {
            return Err(OrderingError::validation("Dish options are still loading"));
        }

        let priced = state.inspection.priced_selection();
        state.cart.add_line(&dish, quantity, priced)
    }

    /// Remove a cart line by position; out-of-range is a no-op
    pub async fn remove_line(&self, index: usize) -> Option<CartLine> {
        self.state.write().await.cart.remove_line(index)
    }

    /// Submit the cart as an order.
    ///
    /// An empty cart is a no-op (`Ok(None)`) and issues no request. The cart
    /// is cleared only after the server confirms the order.
    pub async fn checkout(&self) -> OrderingResult<Option<OrderCreated>> {
        let (request, revision, submitted) = {
            let state = self.state.read().await;
            if state.cart.is_empty() {
                tracing::debug!("Checkout with empty cart ignored");
                return Ok(None);
            }
            let user_id = state.user_id().ok_or(OrderingError::NotLoggedIn)?;
            (
                state.cart.to_order_request(user_id),
                state.cart.revision(),
                state.cart.lines().to_vec(),
            )
        };

        let created = match self.api.create_order(&request).await {
            Ok(created) => created,
            Err(e) => {
                tracing::warn!(error = %e, "Order submission failed");
                return Err(e.into());
            }
        };

        let mut state = self.state.write().await;
        if state.cart.revision() == revision {
            state.cart.clear();
        } else {
            state.cart.settle(&submitted);
        }
        tracing::info!(
            order_id = created.id,
            total = %request.total_price,
            items = request.items.len(),
            "Order submitted"
        );
        Ok(Some(created))
    }

    // ============ Orders & ratings ============

    /// `GET /orders?user_id=` for the logged-in user
    pub async fn list_orders(&self) -> OrderingResult<Vec<Order>> {
        let user_id = self.require_user().await?;
        let orders = self.api.list_orders(user_id).await?;
        self.state.write().await.orders = orders.clone();
        Ok(orders)
    }

    /// Pay a pending order, then refresh the order list
    pub async fn pay_order(&self, order_id: OrderId) -> OrderingResult<PaymentConfirmation> {
        let user_id = self.require_user().await?;
        let confirmation = self.api.pay_order(order_id).await?;
        tracing::info!(order_id, status = %confirmation.status, "Order paid");

        match self.api.list_orders(user_id).await {
            Ok(orders) => self.state.write().await.orders = orders,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to refresh orders after payment");
                let mut state = self.state.write().await;
                if let Some(order) = state.orders.iter_mut().find(|o| o.id == order_id) {
                    order.status = OrderStatus::Paid;
                }
            }
        }
        Ok(confirmation)
    }

    /// Rate the open dish (score 1-5), then reload its ratings
    pub async fn submit_rating(&self, score: i32, comment: Option<&str>) -> OrderingResult<Rating> {
        let user_id = self.require_user().await?;
        if !(1..=5).contains(&score) {
            return Err(OrderingError::Validation(format!(
                "score must be between 1 and 5, got {score}"
            )));
        }
        let dish_id = self
            .state
            .read()
            .await
            .inspection
            .dish()
            .map(|d| d.id)
            .ok_or_else(|| OrderingError::validation("No dish selected"))?;

        let request = RatingCreate {
            user_id,
            dish_id,
            score,
            comment: comment
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string),
        };
        let rating = self.api.create_rating(&request).await?;
        tracing::info!(dish_id, score, "Rating submitted");

        self.reload_ratings().await;
        Ok(rating)
    }

    /// Re-fetch ratings of the open dish; stale results are dropped
    async fn reload_ratings(&self) {
        let Some(ticket) = self.state.read().await.inspection.ratings_ticket() else {
            return;
        };
        let ratings = self
            .api
            .list_dish_ratings(ticket.dish_id)
            .await
            .map_err(|e| {
                tracing::warn!(dish_id = ticket.dish_id, error = %e, "Failed to reload ratings");
                e.message()
            });
        self.state
            .write()
            .await
            .inspection
            .apply_ratings(ticket, ratings);
    }

    // ============ Account ============

    pub async fn login(&self, username: &str, password: &str) -> OrderingResult<UserIdentity> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(OrderingError::validation("Username and password are required"));
        }
        let response = self
            .api
            .login(&LoginRequest {
                username: username.to_string(),
                password: password.to_string(),
            })
            .await?;
        let identity = UserIdentity::from(&response.user);
        self.remember_user(identity.clone()).await;
        tracing::info!(user_id = identity.id, username = %identity.username, "Logged in");
        Ok(identity)
    }

    /// Register a student account and log it in
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        email: Option<&str>,
    ) -> OrderingResult<UserIdentity> {
        let username = username.trim();
        if username.is_empty() {
            return Err(OrderingError::validation("Username is required"));
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(OrderingError::Validation(format!(
                "password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        let user = self
            .api
            .register(&RegisterRequest {
                username: username.to_string(),
                email: email.map(str::trim).filter(|e| !e.is_empty()).map(str::to_string),
                password: password.to_string(),
                role: REGISTER_ROLE.to_string(),
            })
            .await?;
        let identity = UserIdentity::from(&user);
        self.remember_user(identity.clone()).await;
        tracing::info!(user_id = identity.id, username = %identity.username, "Registered");
        Ok(identity)
    }

    /// Forget the user; the cart and order list go with it
    pub async fn logout(&self) {
        let mut state = self.state.write().await;
        state.user = None;
        state.cart.clear();
        state.orders.clear();
        self.persist(&state);
        tracing::info!("Logged out");
    }

    async fn remember_user(&self, identity: UserIdentity) {
        let mut state = self.state.write().await;
        state.user = Some(identity);
        self.persist(&state);
    }

    async fn require_user(&self) -> OrderingResult<i64> {
        self.state
            .read()
            .await
            .user_id()
            .ok_or(OrderingError::NotLoggedIn)
    }

    // ============ Assistant & recommendations ============

    /// Ask the assistant; the exchange is appended to the transcript
    pub async fn chat(&self, message: &str) -> OrderingResult<String> {
        let message = message.trim();
        if message.is_empty() {
            return Err(OrderingError::validation("Message is empty"));
        }
        let user_id = {
            let mut state = self.state.write().await;
            state.chat.push(ChatEntry {
                role: ChatRole::User,
                text: message.to_string(),
            });
            state.user_id()
        };

        let answer = self
            .api
            .chat(&ChatRequest {
                user_id,
                message: message.to_string(),
            })
            .await?
            .answer;

        self.state.write().await.chat.push(ChatEntry {
            role: ChatRole::Assistant,
            text: answer.clone(),
        });
        Ok(answer)
    }

    /// Recommendations for one weekday (0 = Monday; `None` = today)
    pub async fn daily_recommendations(
        &self,
        weekday: Option<u8>,
        limit: u32,
    ) -> OrderingResult<Vec<RecommendedDish>> {
        let weekday = weekday.unwrap_or_else(today);
        if weekday > 6 {
            return Err(OrderingError::Validation(format!(
                "weekday must be 0-6, got {weekday}"
            )));
        }
        Ok(self.api.daily_recommendations(weekday, limit).await?)
    }

    pub async fn weekly_recommendations(
        &self,
        limit_per_day: u32,
    ) -> OrderingResult<WeeklyRecommendations> {
        Ok(self.api.weekly_recommendations(limit_per_day).await?)
    }

    // ============ Persistence ============

    fn persist(&self, state: &AppState) {
        let preferences = Preferences {
            language: Some(state.language),
            user: state.user.clone(),
        };
        if let Err(e) = self.store.save(&preferences) {
            tracing::warn!(error = %e, "Failed to save preferences");
        }
    }
}

/// Current local weekday, 0 = Monday
pub fn today() -> u8 {
    // num_days_from_monday is always 0..=6
    chrono::Local::now().weekday().num_days_from_monday() as u8
}
