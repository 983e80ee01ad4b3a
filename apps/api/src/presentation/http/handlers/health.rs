use crate::presentation::http::state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    locodes: usize,
    version: &'static str,
}

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let locodes = state.locodes.count();

    let status = if locodes > 0 { "healthy" } else { "unhealthy" };
    if locodes == 0 {
        tracing::error!("Health check failed: no locodes loaded");
    }

    let response = HealthResponse {
        status,
        locodes,
        version: env!("CARGO_PKG_VERSION"),
    };

    let code = if locodes > 0 {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (code, Json(response))
}
