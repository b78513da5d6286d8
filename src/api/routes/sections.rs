//! Section Routes
//!
//! JSON endpoints for sections and their charts.
//!
//! - GET /api/v1/sections - List all sections
//! - GET /api/v1/sections/:slug - Render a section
//! - GET /api/v1/sections/:slug/charts/:index - One chart as a Plotly figure

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{BlockResponse, SectionListResponse, SectionResponse, SectionSummary};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::dashboard::Section;

/// GET /api/v1/sections
///
/// List all sections in sidebar order.
pub async fn list_sections() -> Json<SectionListResponse> {
    let sections: Vec<SectionSummary> = Section::all()
        .iter()
        .copied()
        .map(SectionSummary::from)
        .collect();

    Json(SectionListResponse {
        total: sections.len(),
        sections,
    })
}

/// GET /api/v1/sections/:slug
///
/// Render a section into its blocks.
pub async fn get_section(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> ApiResult<Json<SectionResponse>> {
    let section: Section = slug.parse()?;
    let blocks = state.renderer.render(section)?;

    tracing::info!(section = section.slug(), blocks = blocks.len(), "Rendered section");

    Ok(Json(SectionResponse {
        section: section.into(),
        blocks: BlockResponse::from_blocks(blocks)?,
    }))
}

/// GET /api/v1/sections/:slug/charts/:index
///
/// Get one chart of a section as a Plotly figure. Charts are numbered from
/// zero in page order.
pub async fn get_chart(
    State(state): State<Arc<AppState>>,
    Path((slug, index)): Path<(String, usize)>,
) -> ApiResult<Json<serde_json::Value>> {
    let section: Section = slug.parse()?;
    let blocks = state.renderer.render(section)?;

    let chart = blocks
        .iter()
        .filter_map(|b| b.as_chart())
        .nth(index)
        .ok_or_else(|| {
            ApiError::NotFound(format!(
                "Chart {} in section '{}' not found",
                index,
                section.slug()
            ))
        })?;

    Ok(Json(chart.figure()?))
}
