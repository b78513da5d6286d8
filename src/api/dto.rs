//! Data Transfer Objects
//!
//! Response types for the API endpoints.
//! These types are serialized to JSON.

use serde::{Deserialize, Serialize};

use crate::dashboard::{Block, DashboardResult, Section};

// ============================================
// SECTION DTOs
// ============================================

/// Sidebar entry for one section
#[derive(Debug, Serialize)]
pub struct SectionSummary {
    pub slug: String,
    pub label: String,
    pub title: String,
    pub description: String,
}

impl From<Section> for SectionSummary {
    fn from(section: Section) -> Self {
        Self {
            slug: section.slug().to_string(),
            label: section.label().to_string(),
            title: section.title().to_string(),
            description: section.description().to_string(),
        }
    }
}

/// List of all sections in sidebar order
#[derive(Debug, Serialize)]
pub struct SectionListResponse {
    pub sections: Vec<SectionSummary>,
    pub total: usize,
}

/// A rendered section
#[derive(Debug, Serialize)]
pub struct SectionResponse {
    pub section: SectionSummary,
    pub blocks: Vec<BlockResponse>,
}

/// One block; charts also carry their Plotly figure
#[derive(Debug, Serialize)]
pub struct BlockResponse {
    #[serde(flatten)]
    pub block: Block,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub figure: Option<serde_json::Value>,
}

impl BlockResponse {
    /// Wrap a block, attaching the Plotly figure of a chart
    pub fn new(block: Block) -> DashboardResult<Self> {
        let figure = block.as_chart().map(|chart| chart.figure()).transpose()?;
        Ok(Self { block, figure })
    }

    /// Wrap every block of a rendered section
    pub fn from_blocks(blocks: Vec<Block>) -> DashboardResult<Vec<Self>> {
        blocks.into_iter().map(Self::new).collect()
    }
}

/// Query string for the page route
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// Section slug or label
    #[serde(default)]
    pub section: Option<String>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub sections: usize,
    pub seeded: bool,
    pub started_at: String,
    pub uptime_seconds: u64,
    pub version: String,
}
