//! Render Surfaces
//!
//! A surface receives a section's blocks one at a time, in order, and turns
//! them into output:
//!
//! - **html**: the full dashboard page with Plotly figures
//! - **text**: plain text for terminals
//!
//! # Example
//!
//! ```rust
//! use landsat_dashboard::dashboard::{Section, SectionRenderer};
//! use landsat_dashboard::surface::TextSurface;
//!
//! let mut out = String::new();
//! let mut surface = TextSurface::new(&mut out);
//! SectionRenderer::new(Some(1))
//!     .render_to(Section::SatellitePrograms, &mut surface)
//!     .unwrap();
//! assert!(out.contains("NASA Harvest"));
//! ```

pub mod html;
pub mod text;

pub use html::{HtmlSurface, DEFAULT_PLOTLY_URL};
pub use text::TextSurface;

use crate::dashboard::{Block, ChartSpec, DashboardResult};

/// Output target for rendered blocks
pub trait RenderSurface {
    fn header(&mut self, title: &str, description: &str) -> DashboardResult<()>;
    fn subheader(&mut self, text: &str) -> DashboardResult<()>;
    fn chart(&mut self, chart: &ChartSpec) -> DashboardResult<()>;
    fn info(&mut self, text: &str) -> DashboardResult<()>;
    fn text(&mut self, text: &str) -> DashboardResult<()>;
    fn buttons(&mut self, labels: &[String]) -> DashboardResult<()>;
}

/// Emit blocks to a surface in order
pub fn emit<S: RenderSurface + ?Sized>(blocks: &[Block], surface: &mut S) -> DashboardResult<()> {
    for block in blocks {
        match block {
            Block::Header { title, description } => surface.header(title, description)?,
            Block::Subheader { text } => surface.subheader(text)?,
            Block::Chart { chart } => surface.chart(chart)?,
            Block::Info { text } => surface.info(text)?,
            Block::Text { text } => surface.text(text)?,
            Block::Buttons { labels } => surface.buttons(labels)?,
        }
    }
    Ok(())
}
