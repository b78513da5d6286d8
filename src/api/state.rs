//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::dashboard::{Section, SectionRenderer};

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Section renderer (holds the optional fixed seed)
    pub renderer: SectionRenderer,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
    /// Wall-clock start time reported by the health endpoint
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(renderer: SectionRenderer, config: ApiConfig) -> Self {
        Self {
            renderer,
            config: Arc::new(config),
            start_time: Instant::now(),
            started_at: Utc::now(),
        }
    }

    /// Build state from the loaded configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            SectionRenderer::new(config.render.seed),
            ApiConfig::from(config),
        )
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Allowed CORS origins; empty allows any origin
    pub cors_origins: Vec<String>,
    /// Section served at "/"
    pub default_section: Section,
    /// Plotly.js bundle URL embedded in pages
    pub plotly_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for ApiConfig {
    fn from(config: &Config) -> Self {
        Self {
            host: config.server.host.clone(),
            port: config.server.port,
            cors_origins: config.server.cors_origins.clone(),
            default_section: config.render.default_section,
            plotly_url: config.render.plotly_url.clone(),
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addr() {
        let config = ApiConfig::new("127.0.0.1", 9000);
        assert_eq!(config.addr(), "127.0.0.1:9000");
        assert_eq!(config.default_section, Section::OpenETEvapotranspiration);
    }

    #[test]
    fn test_from_config() {
        let mut config = Config::default();
        config.render.seed = Some(3);
        config.render.default_section = Section::ARSETTraining;

        let state = AppState::from_config(&config);
        assert_eq!(state.renderer.seed(), Some(3));
        assert_eq!(state.config.default_section, Section::ARSETTraining);
        assert_eq!(state.config.port, 8501);
    }
}
