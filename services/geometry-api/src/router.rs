//! Route table and middleware.

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Extension, Router,
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{health, parse};
use crate::state::AppState;

/// Build the application router.
pub fn build_router(state: Arc<AppState>) -> Router {
    let body_limit = state.config.max_body_bytes;

    Router::new()
        // Parsing
        .route("/parse", post(parse::parse_handler))
        .route("/parse/wkt", post(parse::parse_wkt_handler))
        // Health & metrics
        .route("/health", get(health::health_handler))
        .route("/metrics", get(health::metrics_handler))
        .route("/api/stats", get(health::stats_handler))
        // Middleware
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
}
