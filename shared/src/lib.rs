//! Shared types for the canteen ordering client
//!
//! Wire models exchanged with the canteen service, plus the display
//! language enum used by every crate.

pub mod language;
pub mod models;

// Re-exports
pub use language::DisplayLanguage;
pub use rust_decimal::Decimal;
pub use serde::{Deserialize, Serialize};
