//! Unified error handling for the backend API.
//!
//! Handlers return [`ApiResult`] and use `?`; every variant renders as an
//! `ErrorResponse` JSON body with a matching status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::api::ErrorResponse;
use thiserror::Error;

use crate::auth::AuthError;

#[derive(Debug, Error)]
pub enum AppError {
    /// Request body failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// No valid session
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Auth service call failed
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Database or other internal failure
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        AppError::Unauthorized(message.into())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            AppError::Auth(AuthError::Rejected { message, .. }) => {
                tracing::warn!("Auth service rejected request: {}", message);
                (StatusCode::BAD_REQUEST, message.clone())
            }
            AppError::Auth(e) => {
                tracing::error!("Auth service error: {:?}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    "Auth service unavailable".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse::new(error_message))).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, AppError>;
