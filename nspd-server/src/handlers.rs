//! Route handlers. Every search answers 200; the outcome lives in the body.

use axum::Json;
use axum::extract::{Path, State};
use nspd::SearchReport;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Body of `POST /search`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    pub cadastral_number: String,
}

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
}

/// GET /health
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// POST /search
pub async fn search(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Json<SearchReport> {
    Json(state.gateway.search(&req.cadastral_number).await)
}

/// GET /search/:cadastral_number
pub async fn search_by_path(
    State(state): State<AppState>,
    Path(cadastral_number): Path<String>,
) -> Json<SearchReport> {
    Json(state.gateway.search(&cadastral_number).await)
}
