use axum::extract::State;
use axum::{routing::get, Json, Router};
use penalty_core::filter::FilterSpecification;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the store does not answer.
    pub status: &'static str,
    pub version: &'static str,
    pub store_healthy: bool,
    /// Records currently held; absent when the store is unhealthy.
    pub records: Option<usize>,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let records = match penalty_db::health_check(&state.store).await {
        Ok(()) => state
            .store
            .list(&FilterSpecification::default())
            .await
            .ok()
            .map(|all| all.len()),
        Err(e) => {
            tracing::warn!(error = %e, "Record store health check failed");
            None
        }
    };
    let store_healthy = records.is_some();

    Json(HealthResponse {
        status: if store_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        store_healthy,
        records,
    })
}

/// Mounted at the root, outside `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
