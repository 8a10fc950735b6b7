//! Application error types and Axum response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use recipelens_core::RecipeError;
use serde::Serialize;
use tracing::error;

/// Application-level errors with HTTP status code mapping.
///
/// Callers only ever see two error bodies: the 400 missing-input message
/// and the generic 500. Upstream detail stays in the server log.
#[derive(Debug)]
pub enum AppError {
    /// Neither an image nor an ingredient list was supplied.
    MissingInput,
    /// Anything that went wrong after validation: malformed request
    /// JSON, upstream failure, or a non-compliant completion payload.
    Internal(String),
}

impl From<RecipeError> for AppError {
    fn from(e: RecipeError) -> Self {
        AppError::Internal(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Internal(e.to_string())
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::MissingInput => (
                StatusCode::BAD_REQUEST,
                "No image or ingredients provided",
            ),
            AppError::Internal(detail) => {
                error!("recipe generation failed: {}", detail);
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to generate recipes")
            }
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
