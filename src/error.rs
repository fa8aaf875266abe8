// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Rejected input to a calculator or the serving scaler.
///
/// Raised instead of letting NaN or infinity flow into results.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Invalid argument: {0}")]
pub struct InvalidArgument(pub String);

impl InvalidArgument {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),

    #[error("USDA API error: {0}")]
    Upstream(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Message returned to clients for any upstream failure.
    pub const UPSTREAM_FAILURE: &'static str = "Failed to fetch from USDA API";

    pub fn is_upstream(&self) -> bool {
        matches!(self, AppError::Upstream(_))
    }
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                "Not found".to_string(),
                Some(msg.clone()),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
            AppError::InvalidArgument(err) => (StatusCode::BAD_REQUEST, err.0.clone(), None),
            AppError::Upstream(msg) => {
                tracing::error!(error = %msg, "USDA API proxy error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Self::UPSTREAM_FAILURE.to_string(),
                    None,
                )
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
        };

        let body = ErrorResponse { error, details };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
