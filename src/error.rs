//! Application error type shared by the core and the HTTP adapter.
//!
//! The core raises [`AppError::InvalidInput`] and [`AppError::NotFound`];
//! [`AppError::MethodNotAllowed`] comes from routing only, and everything
//! else is [`AppError::Internal`]. The [`IntoResponse`] impl is the
//! only place that knows about HTTP status codes.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload returned to API clients.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The caller supplied a blank, schemeless, hostless, or malformed URL.
    #[error("{message}")]
    InvalidInput { message: String, details: Value },

    /// No record exists for the requested short code.
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// The path exists but does not accept the request method.
    #[error("{message}")]
    MethodNotAllowed { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn invalid_input(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidInput {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn method_not_allowed(message: impl Into<String>, details: Value) -> Self {
        Self::MethodNotAllowed {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Returns the stable error code used in API responses.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidInput { .. } => "validation_error",
            AppError::NotFound { .. } => "not_found",
            AppError::MethodNotAllowed { .. } => "method_not_allowed",
            AppError::Internal { .. } => "internal_error",
        }
    }

    /// Returns the HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts the error into the client-facing payload.
    ///
    /// Internal errors are reported with a generic message; the original
    /// message is logged instead of being sent to the client.
    pub fn to_error_info(&self) -> ErrorInfo {
        match self {
            AppError::InvalidInput { message, details }
            | AppError::NotFound { message, details }
            | AppError::MethodNotAllowed { message, details } => ErrorInfo {
                code: self.code(),
                message: message.clone(),
                details: details.clone(),
            },
            AppError::Internal { message, .. } => {
                tracing::error!("Internal error: {}", message);
                ErrorInfo {
                    code: self.code(),
                    message: "An unexpected error occurred. Please try again later.".to_string(),
                    details: json!({}),
                }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::invalid_input(
            r#"Request body is missing or malformed. Expected JSON: {"url": "https://example.com"}"#,
            json!({ "reason": rejection.body_text() }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_message() {
        let err = AppError::not_found("Short code not found: abc1234", json!({}));
        assert_eq!(err.to_string(), "Short code not found: abc1234");
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::invalid_input("bad", json!({})).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::not_found("missing", json!({})).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::method_not_allowed("wrong verb", json!({})).status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            AppError::internal("boom", json!({})).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_message_is_not_exposed() {
        let err = AppError::internal("keyspace exhausted", json!({ "attempts": 3 }));
        let info = err.to_error_info();

        assert_eq!(info.code, "internal_error");
        assert!(!info.message.contains("keyspace"));
        assert_eq!(info.details, json!({}));
    }

    #[test]
    fn test_validation_info_keeps_details() {
        let err = AppError::invalid_input("URL must not be blank", json!({ "url": "" }));
        let info = err.to_error_info();

        assert_eq!(info.code, "validation_error");
        assert_eq!(info.message, "URL must not be blank");
        assert_eq!(info.details["url"], "");
    }
}
