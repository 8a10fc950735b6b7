//! HTTP route handlers.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use recipelens_core::{validate_collection, GenerateRequest, Prompt, RecipeError};
use tracing::info;

use crate::error::AppError;
use crate::state::AppState;

/// Health check endpoint.
pub async fn health() -> &'static str {
    "OK"
}

/// CORS preflight: 200, empty body. The CORS headers themselves are
/// added by the response middleware.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Method gate for `/recipe`: anything that is not POST or OPTIONS.
pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(serde_json::json!({ "error": "Method not allowed" })),
    )
}

/// POST /recipe — the one real operation.
///
/// Validates input, builds the prompt variant, makes the single
/// upstream completion call, validates the returned payload against the
/// recipe schema, and relays it verbatim.
pub async fn generate(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<serde_json::Value>, AppError> {
    // An absent body behaves like `{}` and falls through to input
    // validation; a present-but-unparseable body is a caught error.
    let request: GenerateRequest = if body.is_empty() {
        GenerateRequest::default()
    } else {
        serde_json::from_slice(&body)?
    };

    let prompt = Prompt::build(&request).ok_or(AppError::MissingInput)?;

    let completion = state.client.complete(&prompt).await?;

    let payload: serde_json::Value =
        serde_json::from_str(&completion.content).map_err(RecipeError::from)?;
    validate_collection(&payload)?;

    info!(
        input_tokens = completion.metrics.input_tokens,
        output_tokens = completion.metrics.output_tokens,
        elapsed_ms = completion.metrics.elapsed_ms,
        "recipes generated"
    );

    Ok(Json(payload))
}
