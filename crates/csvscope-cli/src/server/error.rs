//! API error types and handling.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use csvscope::CsvscopeError;
use serde::Serialize;

/// API error type.
#[derive(Debug)]
pub enum ApiError {
    /// No dataset has been uploaded yet.
    NoDataset,
    /// Bad request from client.
    BadRequest(String),
    /// Internal server error.
    Internal(String),
    /// Error from the csvscope library.
    Csvscope(CsvscopeError),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::NoDataset => (
                StatusCode::NOT_FOUND,
                "no_dataset",
                "Upload a CSV file first".to_string(),
            ),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal", msg),
            ApiError::Csvscope(e) if e.is_parse_error() => {
                (StatusCode::BAD_REQUEST, "parse_error", e.to_string())
            }
            ApiError::Csvscope(e @ CsvscopeError::Render { .. }) => {
                (StatusCode::BAD_REQUEST, "render_error", e.to_string())
            }
            ApiError::Csvscope(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal",
                e.to_string(),
            ),
        };

        (
            status,
            Json(ErrorResponse {
                error: error.to_string(),
                message,
            }),
        )
            .into_response()
    }
}

impl From<CsvscopeError> for ApiError {
    fn from(err: CsvscopeError) -> Self {
        ApiError::Csvscope(err)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::NoDataset => write!(f, "No dataset loaded"),
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
            ApiError::Csvscope(e) => write!(f, "csvscope error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}
