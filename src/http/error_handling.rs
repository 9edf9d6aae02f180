// src/http/error_handling.rs
//
// Error Handling for HTTP Handlers
//
// ARCHITECTURE:
// - Maps internal errors → wire responses in exactly one place
// - Validation and connectivity messages reach the client
// - Everything else is logged and replaced by a generic body

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::error::AppError;

/// Error body: `{"error": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Success body for operations without a payload: `{"message": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl ErrorResponse {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            // Caller-supplied data was malformed; echo the specific reason
            AppError::Domain(e) => (StatusCode::BAD_REQUEST, ErrorResponse::new(e.to_string())),

            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new("Catalogue not found"),
            ),

            // Store unreachable; the connectivity message is safe to echo
            AppError::Connection(msg) => {
                error!("database connectivity failure: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(format!("Database connection error: {}", msg)),
                )
            }

            // Anything else: log the detail, return a generic body
            other => {
                error!("unexpected failure: {:?}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("Unexpected error occurred"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
