//! Error handling - RFC 7807 compliant responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use std::fmt;

use uyd_core::error::RepoError;
use uyd_core::ports::UploadError;
use uyd_infra::auth::ApiKeyError;
use uyd_shared::ErrorResponse;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Unauthorized(String),
    Forbidden(String),
    UnsupportedMediaType(String),
    PayloadTooLarge(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            AppError::UnsupportedMediaType(msg) => write!(f, "Unsupported media type: {}", msg),
            AppError::PayloadTooLarge(msg) => write!(f, "Payload too large: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail.clone()),
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail.clone()),
            AppError::Unauthorized(detail) => ErrorResponse::unauthorized(detail.clone()),
            AppError::Forbidden(detail) => ErrorResponse::forbidden(detail.clone()),
            AppError::UnsupportedMediaType(detail) => {
                ErrorResponse::unsupported_media_type(detail.clone())
            }
            AppError::PayloadTooLarge(detail) => ErrorResponse::payload_too_large(detail.clone()),
            AppError::Internal(detail) => {
                // Operator-facing detail goes to the logs, not the caller.
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound("Resource not found".to_string()),
            RepoError::Connection(msg) => {
                tracing::error!("Database connection error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            RepoError::Query(msg) => {
                tracing::error!("Database query error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

impl From<UploadError> for AppError {
    fn from(err: UploadError) -> Self {
        match err {
            UploadError::MissingFilename => AppError::BadRequest("No file provided".to_string()),
            UploadError::UnsupportedMediaType => AppError::UnsupportedMediaType(err.to_string()),
            UploadError::PayloadTooLarge { .. } => AppError::PayloadTooLarge(err.to_string()),
            UploadError::Io(cause) => {
                tracing::error!("Upload storage error: {}", cause);
                AppError::Internal("Error saving file".to_string())
            }
        }
    }
}

impl From<ApiKeyError> for AppError {
    fn from(err: ApiKeyError) -> Self {
        match err {
            ApiKeyError::MissingKey => AppError::Unauthorized("Missing API key".to_string()),
            ApiKeyError::InvalidKey => AppError::Forbidden("Invalid API key".to_string()),
            ApiKeyError::NotConfigured => {
                tracing::error!("API key is not configured");
                AppError::Internal("Server misconfiguration".to_string())
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
