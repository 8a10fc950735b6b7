//! HTTP surface for the recipelens service.
//!
//! One method-gated endpoint (`/recipe`) plus a health check. Every
//! response carries the CORS trio so browser clients can call the
//! service cross-origin.

pub mod cors;
pub mod error;
pub mod handlers;
pub mod state;

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::routing::{get, post};
use axum::{middleware, Router};
use tower_http::trace::TraceLayer;
use tracing::info;
use uuid::Uuid;

use crate::state::AppState;

/// Builds the application router over shared state.
pub fn app(state: Arc<AppState>) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                id = %Uuid::new_v4(),
                method = %req.method(),
                uri = %req.uri(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    Router::new()
        .route(
            "/recipe",
            post(handlers::generate)
                .options(handlers::preflight)
                .fallback(handlers::method_not_allowed),
        )
        .route("/health", get(handlers::health))
        .layer(trace_layer)
        .layer(middleware::from_fn(cors::apply))
        .with_state(state)
}
