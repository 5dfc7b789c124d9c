//! HTTP routes (axum)

use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

/// Create the gateway router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Brokerage routes
        .route(
            "/api/breeze/admin/api-session",
            post(handlers::set_session),
        )
        .route("/api/breeze/quotes", post(handlers::get_quotes))
        .route("/api/breeze/depth", post(handlers::get_depth))
        // Analysis route
        .route("/api/analyze_market", post(handlers::analyze_market))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
