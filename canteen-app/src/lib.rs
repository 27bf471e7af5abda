//! Canteen App - cart composition and bilingual ordering engine
//!
//! - [`pricing`]: option surcharge parsing and money formatting
//! - [`cart`]: cart lines merged by fingerprint
//! - [`inspection`]: the open dish, its options and ratings
//! - [`presentation`]: pure rendering of the whole state in one language
//! - [`session`]: event handlers wiring the above to the canteen API

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod inspection;
pub mod logging;
pub mod presentation;
pub mod pricing;
pub mod session;
pub mod shell;
pub mod state;
pub mod storage;

pub use cart::{Cart, CartLine, Fingerprint, PricedSelection, Selection, parse_quantity};
pub use config::AppConfig;
pub use error::{OrderingError, OrderingResult};
pub use i18n::{Domain, LocalizationTable, Translation};
pub use inspection::{DishInspection, LoadTicket, PendingOpen};
pub use pricing::{format_price, parse_surcharge};
pub use session::OrderingSession;
pub use state::{AppState, SharedState};
pub use storage::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, Preferences, UserIdentity};

// Re-export for binaries and tests
pub use canteen_client;
pub use shared;
