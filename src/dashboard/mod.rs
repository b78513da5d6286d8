//! Dashboard Core
//!
//! The section router and everything it builds:
//!
//! - **section**: the five selectable pages
//! - **chart**: chart specifications and their Plotly mapping
//! - **block**: display instructions emitted per section
//! - **dataset**: literal tables and the synthetic productivity trend
//! - **render**: section builders and the exhaustive dispatch
//! - **error**: error types
//!
//! # Example
//!
//! ```rust
//! use landsat_dashboard::dashboard::{render_section, Section};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let blocks = render_section(Section::SatellitePrograms, &mut rng).unwrap();
//! assert_eq!(blocks.len(), 3);
//! ```

pub mod block;
pub mod chart;
pub mod dataset;
pub mod error;
pub mod render;
pub mod section;

pub use block::Block;
pub use chart::{
    Axis, AxisLabels, ChartKind, ChartSpec, Colorscale, MarkerStyle, Series, XValue,
};
pub use dataset::ProductivityTrend;
pub use error::{DashboardError, DashboardResult};
pub use render::{render_section, render_to, SectionRenderer};
pub use section::Section;
