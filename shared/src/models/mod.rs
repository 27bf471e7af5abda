//! Data models
//!
//! Wire shapes of the canteen service. The client treats catalog data
//! (canteens, dishes, option groups) as read-only.

pub mod canteen;
pub mod chat;
pub mod dish;
pub mod option;
pub mod order;
pub mod rating;
pub mod recommendation;
pub mod user;

pub use canteen::Canteen;
pub use chat::{ChatAnswer, ChatRequest};
pub use dish::{Dish, DishId, DishRef};
pub use option::{NOT_SELECTED, OptionGroup, OptionValue};
pub use order::{
    Order, OrderCreate, OrderCreated, OrderId, OrderItem, OrderItemInput, OrderStatus,
    PaymentConfirmation,
};
pub use rating::{Rating, RatingCreate};
pub use recommendation::{DayRecommendations, RecommendedDish, WeeklyRecommendations};
pub use user::{LoginRequest, LoginResponse, RegisterRequest, UserId, UserRecord};
