//! Router assembly for the modelmill HTTP API.
//!
//! [`build_router`] wires both handler functions to their routes with
//! CORS and tracing middleware layers.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router with both routes registered.
///
/// Routes use axum 0.8 `{*param}` wildcard syntax. CORS is permissive
/// (editor frontends call from various origins). TraceLayer provides
/// request-level logging via tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/compile", post(handlers::compile::compile))
        .route("/img/{*path}", get(handlers::image::serve_image))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
