//! Client configuration

use crate::{ClientResult, HttpCanteenClient};

/// Client configuration for connecting to the canteen service
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://127.0.0.1:8000")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> ClientResult<HttpCanteenClient> {
        HttpCanteenClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://127.0.0.1:8000")
    }
}
