//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (ready to serve traffic)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;
use crate::dashboard::Section;

/// GET /health/live
///
/// Kubernetes liveness probe.
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Kubernetes readiness probe.
/// Returns 200 once the default section renders.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    if check_render_health(&state) {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// GET /health
///
/// Full health status.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let status = if check_render_health(&state) {
        "healthy"
    } else {
        "unhealthy"
    };

    Json(HealthResponse {
        status: status.to_string(),
        sections: Section::all().len(),
        seeded: state.renderer.seed().is_some(),
        started_at: state.started_at.to_rfc3339(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Render the default section and report whether it succeeded
fn check_render_health(state: &AppState) -> bool {
    match state.renderer.render(state.config.default_section) {
        Ok(_) => true,
        Err(e) => {
            tracing::error!("Health check render failed: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_liveness() {
        let status = liveness().await;
        assert_eq!(status, StatusCode::OK);
    }
}
