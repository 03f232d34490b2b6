use axum::{extract::State, Json};
use serde::Serialize;

use crate::{error::Result, AppState};

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<&'static str>,
}

/// Liveness only; never touches the store.
pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        database: None,
    })
}

pub async fn readiness_check(State(state): State<AppState>) -> Result<Json<HealthStatus>> {
    if let Err(e) = state.products.ping().await {
        tracing::warn!("Readiness check failed");
        return Err(e);
    }

    Ok(Json(HealthStatus {
        status: "ready",
        database: Some("connected"),
    }))
}
