//! Error types for the API server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use orchestrator::OrchestratorError;
use thiserror::Error;

/// Errors that can occur while serving a request.
///
/// Internal detail (database, upstream, token machinery) is logged and
/// replaced with a generic message before it reaches a client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad or missing input.
    #[error("{0}")]
    Validation(String),

    /// Login failed. One message for unknown email and wrong password, so
    /// responses cannot be used to enumerate accounts.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No valid session cookie on a guarded route.
    #[error("Authentication required")]
    Unauthenticated,

    /// Requested record does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The AI responder failed or timed out.
    #[error("upstream failure: {0}")]
    Upstream(String),

    /// Database error.
    #[error("database error: {0}")]
    Database(#[from] database::DatabaseError),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<OrchestratorError> for ApiError {
    fn from(err: OrchestratorError) -> Self {
        match err {
            OrchestratorError::EmptyMessage => {
                ApiError::Validation("Message is required".to_string())
            }
            OrchestratorError::Upstream(e) => ApiError::Upstream(e.to_string()),
            OrchestratorError::DeadlineExceeded => {
                ApiError::Upstream("responder deadline exceeded".to_string())
            }
        }
    }
}

impl From<database::ValidationError> for ApiError {
    fn from(err: database::ValidationError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::InvalidCredentials => {
                (StatusCode::BAD_REQUEST, "Invalid credentials".to_string())
            }
            ApiError::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                "Authentication required".to_string(),
            ),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ApiError::Upstream(detail) => {
                tracing::error!("Upstream AI failure: {}", detail);
                (
                    StatusCode::BAD_GATEWAY,
                    "AI service is currently unavailable".to_string(),
                )
            }
            ApiError::Database(err) => {
                tracing::error!("Database error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
            }
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
            }
        };

        let body = serde_json::json!({
            "message": message
        });

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_detail_not_leaked() {
        let response = ApiError::Internal("secret stack trace".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = ApiError::Upstream("provider key rejected".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_orchestrator_error_mapping() {
        let err: ApiError = OrchestratorError::EmptyMessage.into();
        assert!(matches!(err, ApiError::Validation(_)));

        let err: ApiError = OrchestratorError::DeadlineExceeded.into();
        assert!(matches!(err, ApiError::Upstream(_)));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::Validation("bad".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidCredentials.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Unauthenticated.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::NotFound("gone".into()).into_response().status(),
            StatusCode::NOT_FOUND
        );
    }
}
