//! Application state
//!
//! Everything the presentation layer renders lives in one explicit
//! [`AppState`] value. Handlers lock it briefly and never across a
//! network call.

use crate::cart::Cart;
use crate::catalog::Stall;
use crate::inspection::DishInspection;
use crate::storage::UserIdentity;
use shared::DisplayLanguage;
use shared::models::{Canteen, Order};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEntry {
    pub role: ChatRole,
    pub text: String,
}

/// Stalls of the currently expanded canteen
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandedCanteen {
    pub canteen_id: i64,
    pub stalls: Vec<Stall>,
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub language: DisplayLanguage,
    pub user: Option<UserIdentity>,
    pub cart: Cart,
    pub inspection: DishInspection,
    pub canteens: Vec<Canteen>,
    pub expanded: Option<ExpandedCanteen>,
    pub orders: Vec<Order>,
    pub chat: Vec<ChatEntry>,
}

impl AppState {
    pub fn new(language: DisplayLanguage, user: Option<UserIdentity>) -> Self {
        Self {
            language,
            user,
            ..Self::default()
        }
    }

    pub fn user_id(&self) -> Option<i64> {
        self.user.as_ref().map(|u| u.id)
    }

    pub fn into_shared(self) -> SharedState {
        Arc::new(RwLock::new(self))
    }
}

pub type SharedState = Arc<RwLock<AppState>>;
