//! Canteen Client - HTTP client for the canteen ordering service
//!
//! Every call returns parsed response data or one normalized
//! [`ClientError`]; callers never branch on transport details.

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use api::CanteenApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult, resolve_error_message};
pub use http::HttpCanteenClient;

// Re-export shared types for convenience
pub use shared::models;
