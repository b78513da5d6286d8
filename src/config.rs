//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::dashboard::Section;
use crate::surface::DEFAULT_PLOTLY_URL;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub render: RenderConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins; empty allows any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8501
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// Fixed seed for the synthetic data; unset draws fresh noise per render
    #[serde(default)]
    pub seed: Option<u64>,

    /// Section shown when none is selected
    #[serde(default)]
    pub default_section: Section,

    /// Plotly.js bundle loaded by the page
    #[serde(default = "default_plotly_url")]
    pub plotly_url: String,
}

fn default_plotly_url() -> String {
    DEFAULT_PLOTLY_URL.to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            seed: None,
            default_section: Section::default(),
            plotly_url: default_plotly_url(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    ///
    /// `tower_http` stays at debug, where `TraceLayer` logs requests.
    pub fn filter_directive(&self) -> String {
        format!("landsat_dashboard={},tower_http=debug", self.level)
    }

    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("landsat-dashboard").join("config.toml")),
            Some(PathBuf::from("/etc/landsat-dashboard/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        // Server overrides
        if let Ok(host) = std::env::var("LANDSAT_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("LANDSAT_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => tracing::warn!("Ignoring invalid LANDSAT_PORT: {}", port),
            }
        }

        // Render overrides
        if let Ok(seed) = std::env::var("LANDSAT_SEED") {
            match seed.parse() {
                Ok(s) => self.render.seed = Some(s),
                Err(_) => tracing::warn!("Ignoring invalid LANDSAT_SEED: {}", seed),
            }
        }
        if let Ok(section) = std::env::var("LANDSAT_DEFAULT_SECTION") {
            match section.parse() {
                Ok(s) => self.render.default_section = s,
                Err(e) => tracing::warn!("Ignoring LANDSAT_DEFAULT_SECTION: {}", e),
            }
        }
        if let Ok(url) = std::env::var("LANDSAT_PLOTLY_URL") {
            self.render.plotly_url = url;
        }

        // Logging overrides
        if let Ok(level) = std::env::var("LANDSAT_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("LANDSAT_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    format!(
        r#"# Landsat Dashboard Configuration
#
# Environment variables override these settings:
# - LANDSAT_HOST
# - LANDSAT_PORT
# - LANDSAT_SEED
# - LANDSAT_DEFAULT_SECTION
# - LANDSAT_PLOTLY_URL
# - LANDSAT_LOG_LEVEL
# - LANDSAT_LOG_FORMAT

[server]
# Server host
host = "0.0.0.0"

# Server port
port = 8501

# Allowed CORS origins (empty allows any origin)
cors_origins = []

[render]
# Fixed seed for the simulated productivity data.
# Leave unset to draw new values on every render.
# seed = 42

# Section shown at "/": a slug (openet, satellite-programs,
# impact-on-agriculture, arset-training, earth-observatory) or a sidebar
# label such as "Satellite Programs"
default_section = "openet"

# Plotly.js bundle loaded by the dashboard page
plotly_url = "{}"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#,
        DEFAULT_PLOTLY_URL
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8501);
        assert!(config.server.cors_origins.is_empty());
        assert_eq!(config.render.seed, None);
        assert_eq!(config.render.default_section, Section::OpenETEvapotranspiration);
        assert_eq!(config.render.plotly_url, DEFAULT_PLOTLY_URL);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.is_json());
    }

    #[test]
    fn test_generated_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.server.port, 8501);
        assert_eq!(config.render.seed, None);
        assert_eq!(config.render.default_section, Section::OpenETEvapotranspiration);
        assert_eq!(config.render.plotly_url, DEFAULT_PLOTLY_URL);
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[render]\nseed = 7\ndefault_section = \"earth-observatory\"\n\n[logging]\nformat = \"json\""
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.render.seed, Some(7));
        assert_eq!(
            config.render.default_section,
            Section::EarthObservatoryInsights
        );
        assert!(config.logging.is_json());
        assert_eq!(config.server.port, 8501);
    }

    #[test]
    fn test_load_errors() {
        let missing = Config::load(Path::new("/nonexistent/landsat/config.toml"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));

        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[render]\ndefault_section = \"weather\"").unwrap();
        assert!(matches!(
            Config::load(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_filter_directive() {
        assert_eq!(
            LoggingConfig::default().filter_directive(),
            "landsat_dashboard=info,tower_http=debug"
        );

        let logging = LoggingConfig {
            level: "warn".to_string(),
            format: "pretty".to_string(),
        };
        assert_eq!(
            logging.filter_directive(),
            "landsat_dashboard=warn,tower_http=debug"
        );
    }

    #[test]
    fn test_section_label_in_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[render]\ndefault_section = \"Satellite Programs\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.render.default_section, Section::SatellitePrograms);
    }

    #[test]
    fn test_env_overrides() {
        const VARS: [&str; 4] = [
            "LANDSAT_PORT",
            "LANDSAT_SEED",
            "LANDSAT_DEFAULT_SECTION",
            "LANDSAT_LOG_FORMAT",
        ];

        std::env::set_var("LANDSAT_PORT", "9100");
        std::env::set_var("LANDSAT_SEED", "42");
        std::env::set_var("LANDSAT_DEFAULT_SECTION", "Satellite Programs");
        std::env::set_var("LANDSAT_LOG_FORMAT", "json");

        let config = Config::from_env();
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.render.seed, Some(42));
        assert_eq!(config.render.default_section, Section::SatellitePrograms);
        assert!(config.logging.is_json());

        // Environment wins over file values
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 8600\n\n[render]\nseed = 7").unwrap();
        let config = Config::load_with_env(file.path()).unwrap();
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.render.seed, Some(42));

        // Invalid values are ignored
        std::env::set_var("LANDSAT_PORT", "notaport");
        std::env::set_var("LANDSAT_SEED", "xyz");
        std::env::set_var("LANDSAT_DEFAULT_SECTION", "weather");
        let config = Config::from_env();
        assert_eq!(config.server.port, 8501);
        assert_eq!(config.render.seed, None);
        assert_eq!(config.render.default_section, Section::OpenETEvapotranspiration);

        for var in VARS {
            std::env::remove_var(var);
        }
        assert_eq!(Config::from_env().server.port, 8501);
    }
}
