//! Client error types
//!
//! Non-2xx responses come back in three shapes: a JSON body with `detail`,
//! a JSON body with `message`, or plain text. All of them collapse into
//! [`ClientError::Api`] with a single human-readable message.

use http::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Server answered with a non-2xx status
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Request never completed (connect, timeout, body read)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// 2xx response whose body could not be parsed
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Client could not be built
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Build the normalized error for a non-2xx response
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        ClientError::Api {
            status: status.as_u16(),
            message: resolve_error_message(status, body),
        }
    }

    /// HTTP status code, where available
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Network(e) => e.status().map(|s| s.as_u16()),
            ClientError::InvalidResponse(_) | ClientError::Config(_) => None,
        }
    }

    /// Human-readable message
    pub fn message(&self) -> String {
        match self {
            ClientError::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND.as_u16())
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Resolve the message of a failed response.
///
/// Order: `detail` field, `message` field, raw body text, then
/// `HTTP <status> <reason>`.
pub fn resolve_error_message(status: StatusCode, body: &str) -> String {
    if let Ok(Value::Object(fields)) = serde_json::from_str::<Value>(body) {
        for key in ["detail", "message"] {
            if let Some(text) = fields.get(key).and_then(field_text) {
                return text;
            }
        }
    }

    let text = body.trim();
    if !text.is_empty() {
        return text.to_string();
    }

    match status.canonical_reason() {
        Some(reason) => format!("HTTP {} {}", status.as_u16(), reason),
        None => format!("HTTP {}", status.as_u16()),
    }
}

fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        // e.g. validation errors reported as a list
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_wins() {
        let msg = resolve_error_message(
            StatusCode::BAD_REQUEST,
            r#"{"detail": "insufficient stock", "message": "ignored"}"#,
        );
        assert_eq!(msg, "insufficient stock");
    }

    #[test]
    fn test_message_field() {
        let msg = resolve_error_message(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"message": "database is locked"}"#,
        );
        assert_eq!(msg, "database is locked");
    }

    #[test]
    fn test_plain_text_body() {
        let msg = resolve_error_message(StatusCode::BAD_GATEWAY, "upstream unavailable\n");
        assert_eq!(msg, "upstream unavailable");
    }

    #[test]
    fn test_json_without_known_fields_uses_body() {
        let msg = resolve_error_message(StatusCode::BAD_REQUEST, r#"{"error":"x"}"#);
        assert_eq!(msg, r#"{"error":"x"}"#);
    }

    #[test]
    fn test_empty_body_synthesizes_status_line() {
        assert_eq!(
            resolve_error_message(StatusCode::SERVICE_UNAVAILABLE, ""),
            "HTTP 503 Service Unavailable"
        );
        assert_eq!(
            resolve_error_message(StatusCode::from_u16(599).unwrap(), "  "),
            "HTTP 599"
        );
    }

    #[test]
    fn test_structured_detail_is_stringified() {
        let msg = resolve_error_message(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"detail": [{"loc": ["body", "quantity"], "msg": "too small"}]}"#,
        );
        assert!(msg.contains("too small"));
    }

    #[test]
    fn test_null_detail_falls_through() {
        let msg = resolve_error_message(
            StatusCode::BAD_REQUEST,
            r#"{"detail": null, "message": "bad input"}"#,
        );
        assert_eq!(msg, "bad input");
    }

    #[test]
    fn test_api_error_accessors() {
        let err = ClientError::from_response(StatusCode::NOT_FOUND, r#"{"detail":"Dish not found"}"#);
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.message(), "Dish not found");
        assert_eq!(err.to_string(), "Dish not found");
        assert!(err.is_not_found());
    }
}
