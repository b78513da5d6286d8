//! Dashboard error types
//!
//! Defines all errors that can occur while building or emitting a section.

use thiserror::Error;

/// Errors that can occur in the dashboard layer
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Selection does not name one of the dashboard sections
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    /// A series does not line up with its chart's x-axis
    #[error("Series '{series}' in chart '{chart}' has {actual} values, expected {expected}")]
    SeriesLengthMismatch {
        chart: String,
        series: String,
        expected: usize,
        actual: usize,
    },

    /// Chart has no series to draw
    #[error("Chart '{0}' has no series")]
    EmptyChart(String),

    /// Writing to a render surface failed
    #[error("Format error: {0}")]
    Format(#[from] std::fmt::Error),

    /// Figure serialization failed
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;
