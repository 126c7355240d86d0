//! Liveness probe, mounted at the root rather than under `/api`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use moguri_core::roulette::service_today;
use moguri_core::types::Date;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    /// `ok`, or `degraded` when the database is unreachable.
    pub status: &'static str,
    pub version: &'static str,
    pub database: bool,
    /// Day the roulette currently counts plays against.
    pub service_date: Date,
}

/// GET /health
///
/// Answers 503 when the database cannot be reached.
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthStatus>) {
    let database = moguri_db::health_check(&state.pool).await.is_ok();
    let (code, status) = if database {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    let body = HealthStatus {
        status,
        version: env!("CARGO_PKG_VERSION"),
        database,
        service_date: service_today(),
    };
    (code, Json(body))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
