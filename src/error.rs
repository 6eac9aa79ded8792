/// Error types for Comment Service
///
/// Errors are converted to appropriate HTTP responses for API clients.
/// Every failure surfaces as a non-2xx status; nothing is silently
/// recovered and no operation returns a partial success.
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use thiserror::Error;

/// Result type for comment-service operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or invalid bearer token on a guarded operation
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Request body failed shape validation (missing field, empty content)
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// Identifier does not match the store's identifier scheme
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// Well-formed identifier with no matching live document
    #[error("Not found: {0}")]
    NotFound(String),

    /// Document store operation failed
    #[error("Store error: {0}")]
    Store(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidIdentifier(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        HttpResponse::build(status).json(serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::InvalidPayload(err.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        AppError::Unauthorized(format!("invalid token: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_taxonomy() {
        assert_eq!(
            AppError::Unauthorized("x".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::InvalidPayload("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::InvalidIdentifier("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Store("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn malformed_id_is_distinct_from_not_found() {
        let malformed = AppError::InvalidIdentifier("fff".into()).status_code();
        let absent = AppError::NotFound("gone".into()).status_code();
        assert_ne!(malformed, absent);
        assert_ne!(malformed, StatusCode::OK);
    }
}
