//! # Landsat Dashboard
//!
//! Landsat data in agriculture and water management: a single-page
//! dashboard with five sections of bar, pie, line and scatter charts, served
//! over HTTP and renderable from the command line.
//!
//! ## Modules
//!
//! - [`dashboard`]: Sections, chart specifications and the section renderer
//! - [`surface`]: HTML and plain-text render surfaces
//! - [`api`]: HTTP server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust
//! use landsat_dashboard::dashboard::{Section, SectionRenderer};
//! use landsat_dashboard::surface::HtmlSurface;
//!
//! // A fixed seed makes the simulated data reproducible
//! let renderer = SectionRenderer::new(Some(42));
//!
//! let blocks = renderer.render(Section::ImpactOnAgriculture).unwrap();
//! println!("{} blocks", blocks.len());
//!
//! let mut page = HtmlSurface::new(Section::SatellitePrograms);
//! renderer.render_to(Section::SatellitePrograms, &mut page).unwrap();
//! let html = page.finish();
//! assert!(html.contains("Satellite Programs"));
//! ```

pub mod api;
pub mod config;
pub mod dashboard;
pub mod surface;

// Re-export top-level types for convenience
pub use dashboard::{
    render_section, render_to, Axis, Block, ChartKind, ChartSpec, DashboardError,
    DashboardResult, Section, SectionRenderer, Series,
};

pub use surface::{HtmlSurface, RenderSurface, TextSurface};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::{Config, ConfigError, LoggingConfig, RenderConfig, ServerConfig};
