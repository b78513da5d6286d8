//! Page Routes
//!
//! Server-rendered dashboard pages.
//!
//! - GET / - Default section, or `?section=<slug|label>`
//! - GET /sections/:slug - A specific section

use axum::{
    extract::{Path, Query, State},
    response::Html,
};
use std::sync::Arc;

use crate::api::dto::PageQuery;
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::dashboard::Section;
use crate::surface::HtmlSurface;

/// GET /
pub async fn index(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> ApiResult<Html<String>> {
    let section = match query.section.as_deref() {
        Some(selection) => selection.parse()?,
        None => state.config.default_section,
    };
    render_page(&state, section)
}

/// GET /sections/:slug
pub async fn section_page(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> ApiResult<Html<String>> {
    let section: Section = slug.parse()?;
    render_page(&state, section)
}

fn render_page(state: &AppState, section: Section) -> ApiResult<Html<String>> {
    let mut surface = HtmlSurface::with_plotly_url(section, state.config.plotly_url.clone());
    state.renderer.render_to(section, &mut surface)?;

    tracing::info!(
        section = section.slug(),
        charts = surface.chart_count(),
        "Rendered page"
    );

    Ok(Html(surface.finish()))
}
