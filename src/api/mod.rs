//! Landsat Dashboard HTTP API
//!
//! HTTP layer for the dashboard, built with Axum. Every request renders its
//! section from scratch; no state is kept between requests.
//!
//! # Endpoints
//!
//! ## Pages
//! - `GET /` - Dashboard page for the default section (`?section=` selects one)
//! - `GET /sections/:slug` - Dashboard page for a section
//!
//! ## Sections
//! - `GET /api/v1/sections` - List all sections
//! - `GET /api/v1/sections/:slug` - Render a section as JSON blocks
//! - `GET /api/v1/sections/:slug/charts/:index` - One chart as a Plotly figure
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,no_run
//! use landsat_dashboard::api::{serve, AppState};
//! use landsat_dashboard::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let state = AppState::from_config(&config);
//!     serve(state).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{http::HeaderValue, routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/sections", get(routes::sections::list_sections))
        .route("/sections/:slug", get(routes::sections::get_section))
        .route(
            "/sections/:slug/charts/:index",
            get(routes::sections::get_chart),
        );

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let cors = cors_layer(&state.config.cors_origins);
    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::page::index))
        .route("/sections/:slug", get(routes::page::section_page))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// Permissive when no origins are configured, otherwise an allow-list
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new().allow_origin(allowed)
}

/// Start the HTTP server
pub async fn serve(state: AppState) -> Result<(), ApiError> {
    let addr = state.config.addr();
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Landsat dashboard listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Landsat dashboard shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
