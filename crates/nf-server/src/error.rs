use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use nf_app::{ArticleServiceError, SendPushError};
use thiserror::Error;
use tracing::error;

/// Stable, machine-readable identifiers carried in every error body.
pub mod error_code {
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const VALIDATION_FAILED: &str = "VALIDATION_FAILED";
    pub const MISSING_QUERY: &str = "MISSING_QUERY";
    pub const INVALID_PUSH_REQUEST: &str = "INVALID_PUSH_REQUEST";
    pub const PUSH_FAILED: &str = "PUSH_FAILED";
    pub const INTERNAL: &str = "INTERNAL";
}

/// Error returned by every handler, rendered as
/// `{"code": "NOT_FOUND", "message": "..."}`.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("Search query is required")]
    MissingQuery,

    #[error("{0}")]
    InvalidPush(String),

    #[error("Failed to send notification: {0}")]
    PushFailed(String),

    #[error("{0}")]
    Internal(String),
}

impl ServiceError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ServiceError::NotFound(_) => error_code::NOT_FOUND,
            ServiceError::Validation(_) => error_code::VALIDATION_FAILED,
            ServiceError::MissingQuery => error_code::MISSING_QUERY,
            ServiceError::InvalidPush(_) => error_code::INVALID_PUSH_REQUEST,
            ServiceError::PushFailed(_) => error_code::PUSH_FAILED,
            ServiceError::Internal(_) => error_code::INTERNAL,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Validation(_)
            | ServiceError::MissingQuery
            | ServiceError::InvalidPush(_) => StatusCode::BAD_REQUEST,
            ServiceError::PushFailed(_) | ServiceError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(code = self.error_code(), error = %self, "Request failed");
        }
        let body = serde_json::json!({
            "code": self.error_code(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}

impl From<ArticleServiceError> for ServiceError {
    fn from(err: ArticleServiceError) -> Self {
        match err {
            ArticleServiceError::Invalid(e) => ServiceError::Validation(e.to_string()),
            ArticleServiceError::MissingQuery => ServiceError::MissingQuery,
            ArticleServiceError::NotFound(_) => ServiceError::NotFound("Article not found".into()),
            ArticleServiceError::Repository(e) => ServiceError::Internal(e.to_string()),
        }
    }
}

impl From<SendPushError> for ServiceError {
    fn from(err: SendPushError) -> Self {
        match err {
            SendPushError::Invalid(e) => ServiceError::InvalidPush(e.to_string()),
            SendPushError::Delivery(e) => ServiceError::PushFailed(e.to_string()),
        }
    }
}

impl From<JsonRejection> for ServiceError {
    fn from(rejection: JsonRejection) -> Self {
        ServiceError::Validation(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nf_core::article::DraftValidationError;
    use nf_core::notification::PushValidationError;
    use nf_core::ports::PushError;

    #[test]
    fn status_code_mapping() {
        assert_eq!(ServiceError::NotFound("x".into()).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ServiceError::Validation("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ServiceError::MissingQuery.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ServiceError::InvalidPush("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ServiceError::PushFailed("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn service_errors_keep_their_messages() {
        let err = ServiceError::from(ArticleServiceError::Invalid(
            DraftValidationError::MissingHeading,
        ));
        assert_eq!(err.error_code(), error_code::VALIDATION_FAILED);
        assert_eq!(err.to_string(), "Heading is required.");

        let err = ServiceError::from(SendPushError::Invalid(PushValidationError::InvalidToken));
        assert_eq!(err.error_code(), error_code::INVALID_PUSH_REQUEST);
        assert_eq!(err.to_string(), "Invalid Expo push token format");

        let err = ServiceError::from(SendPushError::Delivery(PushError::Transport("down".into())));
        assert_eq!(err.error_code(), error_code::PUSH_FAILED);
    }
}
