//! Router construction for the NSPD gateway server.

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the full axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/search", post(handlers::search))
        .route("/search/:cadastral_number", get(handlers::search_by_path))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
