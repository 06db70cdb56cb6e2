use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::api::response::error as error_response;
use crate::store::StoreError;

/// A single field-level validation failure. Errors are always tagged with the
/// field they belong to; handlers never have to parse messages to find out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("validation failed")]
    Validation(Vec<FieldError>),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("store error")]
    Store(#[from] StoreError),

    #[error("internal server error")]
    Internal(String),
}

impl AppError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        AppError::Validation(vec![FieldError::new(field, message)])
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Unauthorized(_) => "UNAUTHORIZED",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Store(_) => "STORE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn log(&self) {
        match self {
            AppError::Validation(errors) => {
                error!("Validation rejected request ({} field errors)", errors.len());
            }
            AppError::Unauthorized(msg) | AppError::NotFound(msg) | AppError::Internal(msg) => {
                error!("Request failed: {}", msg);
            }
            AppError::Store(e) => {
                error!("Store operation failed: {}", e);
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();

        self.log();

        // Internal storage detail stays in the logs; the client gets a
        // stable message and, for validation, the per-field breakdown.
        let (public_message, details) = match &self {
            AppError::Validation(errors) => (
                "Validation failed".to_string(),
                serde_json::to_value(errors).ok(),
            ),
            AppError::Unauthorized(msg) | AppError::NotFound(msg) | AppError::Internal(msg) => {
                (msg.clone(), None)
            }
            AppError::Store(_) => ("A storage error occurred".to_string(), None),
        };

        error_response(code, public_message, details, status)
    }
}
