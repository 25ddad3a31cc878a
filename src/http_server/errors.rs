//! # API Errors
//!
//! Error types for the HTTP surface. Every handler failure funnels through
//! [`ApiError`], which knows its status code and response body shape; 5xx
//! failures are logged server-side before the response is written.

use std::collections::BTreeMap;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::observability::Logger;
use crate::store::StoreError;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Field name to failure message, one entry per failing field
///
/// `BTreeMap` keeps the serialized key order deterministic.
pub type ValidationErrors = BTreeMap<String, String>;

/// API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// No landmark with the requested id
    #[error("Landmark not found")]
    NotFound,

    /// One or more request body fields failed validation; all failures are
    /// reported together
    #[error("Validation failed")]
    Validation(ValidationErrors),

    /// The request body could not be parsed; status and message come from
    /// the extractor rejection
    #[error("{message}")]
    InvalidBody { status: StatusCode, message: String },

    /// Any other failure during request processing
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody { status, .. } => *status,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ApiError::NotFound,
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

/// Single-message error body: `{"error": "..."}`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Multi-field validation body: `{"errors": {"name": "...", ...}}`
#[derive(Debug, Serialize)]
pub struct ValidationBody {
    pub errors: ValidationErrors,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            let message = self.to_string();
            Logger::error(
                "REQUEST_FAILED",
                &[("error", message.as_str()), ("status", status.as_str())],
            );
        }

        match self {
            ApiError::Validation(errors) => {
                (status, Json(ValidationBody { errors })).into_response()
            }
            other => {
                let body = ErrorBody {
                    error: other.to_string(),
                };
                (status, Json(body)).into_response()
            }
        }
    }
}
