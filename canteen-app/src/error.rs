//! Ordering error types

use canteen_client::ClientError;
use thiserror::Error;

/// 点单引擎错误类型
#[derive(Debug, Error)]
pub enum OrderingError {
    /// Rejected locally, never sent to the network
    #[error("{0}")]
    Validation(String),

    /// Identifier did not resolve server-side
    #[error("{0}")]
    NotFound(String),

    #[error("Not logged in")]
    NotLoggedIn,

    /// Network failure, non-2xx or malformed body (already normalized)
    #[error("{0}")]
    Transport(ClientError),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl OrderingError {
    pub fn validation(message: impl Into<String>) -> Self {
        OrderingError::Validation(message.into())
    }

    /// HTTP status, when the failure came from the server
    pub fn status(&self) -> Option<u16> {
        match self {
            OrderingError::Transport(e) => e.status(),
            OrderingError::NotFound(_) => Some(404),
            _ => None,
        }
    }

    /// Message shown to the user, without any prefix for server errors
    pub fn user_message(&self) -> String {
        match self {
            OrderingError::Transport(e) => e.message(),
            other => other.to_string(),
        }
    }
}

impl From<ClientError> for OrderingError {
    fn from(err: ClientError) -> Self {
        if err.is_not_found() {
            OrderingError::NotFound(err.message())
        } else {
            OrderingError::Transport(err)
        }
    }
}

impl From<std::io::Error> for OrderingError {
    fn from(err: std::io::Error) -> Self {
        OrderingError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for OrderingError {
    fn from(err: serde_json::Error) -> Self {
        OrderingError::Storage(err.to_string())
    }
}

pub type OrderingResult<T> = Result<T, OrderingError>;
