//! HTML Surface
//!
//! Builds the dashboard page: title banner, sidebar with every section, the
//! active section body and the footer. Charts are handed to Plotly.js as
//! figure JSON.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use super::RenderSurface;
use crate::dashboard::{ChartSpec, DashboardResult, Section};

/// Plotly.js bundle used when none is configured
pub const DEFAULT_PLOTLY_URL: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

const PAGE_TITLE: &str = "Landsat Data Dashboard";
const BANNER: &str = "Landsat Data in Agriculture and Water Management";
const INTRO: &str = "This dashboard visualizes key insights from Landsat articles and other \
                     NASA sources on satellite data usage in agriculture and water management.";
const FOOTER: &str = "Data sources: NASA Landsat articles, ARSET, Earth Observatory, and \
                      simulated data for visualization purposes.";

const STYLE: &str = r#"
    body { margin: 0; font-family: sans-serif; background-color: #ffffff; color: #2c3e50; }
    .layout { display: flex; min-height: 100vh; }
    .sidebar { background-color: #f5f7fa; padding: 2rem; min-width: 16rem; }
    .sidebar ul { list-style: none; padding: 0; }
    .sidebar li { margin: 0.5rem 0; }
    .sidebar a { color: #2c3e50; text-decoration: none; }
    .sidebar a.active { font-weight: bold; color: #3498db; }
    .sidebar a::before { content: "\25CB  "; }
    .sidebar a.active::before { content: "\25C9  "; }
    main { flex: 1; padding: 2rem; }
    .banner { background-color: #b0b0b0; color: white; padding: 1rem; border-radius: 5px; }
    .section-header h2 { margin-bottom: 0.25rem; }
    .section-header { border-bottom: 4px solid #3498db; margin: 1.5rem 0 1rem; }
    .section-header p { color: #7f8c8d; margin-top: 0; }
    .subheader { color: #34495e; font-weight: bold; }
    .text { color: #2c3e50; }
    .info {
        background-color: #e8f4fd; border-left: 4px solid #3498db;
        padding: 0.75rem 1rem; border-radius: 5px;
    }
    .buttons { display: flex; gap: 1rem; }
    .buttons button {
        background-color: #3498db; color: white; border: none;
        padding: 0.5rem 1rem; border-radius: 5px;
    }
    .chart { width: 100%; min-height: 420px; }
"#;

/// Figure JSON that is safe inside a `<script>` element
fn script_json(chart: &ChartSpec) -> String {
    chart.to_plot().to_json().replace("</", "<\\/")
}

/// Collects a section body and wraps it in the page layout
#[derive(Debug)]
pub struct HtmlSurface {
    active: Section,
    plotly_url: String,
    blocks: Vec<Markup>,
    charts: usize,
}

impl HtmlSurface {
    pub fn new(active: Section) -> Self {
        Self::with_plotly_url(active, DEFAULT_PLOTLY_URL)
    }

    pub fn with_plotly_url(active: Section, plotly_url: impl Into<String>) -> Self {
        Self {
            active,
            plotly_url: plotly_url.into(),
            blocks: Vec::new(),
            charts: 0,
        }
    }

    /// Number of charts emitted so far
    pub fn chart_count(&self) -> usize {
        self.charts
    }

    fn sidebar(&self) -> Markup {
        html! {
            nav class="sidebar" {
                h2 { "Dashboard Sections" }
                p { "Go to" }
                ul {
                    @for section in Section::all() {
                        li {
                            a href=(format!("/sections/{}", section.slug()))
                                class=[(*section == self.active).then_some("active")] {
                                (section.label())
                            }
                        }
                    }
                }
            }
        }
    }

    /// Lay out the complete page
    pub fn render(&self) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (PAGE_TITLE) }
                    script src=(self.plotly_url) {}
                    style { (PreEscaped(STYLE)) }
                }
                body {
                    div class="layout" {
                        (self.sidebar())
                        main {
                            div class="banner" { h1 { (BANNER) } }
                            p class="text" { (INTRO) }
                            @for block in &self.blocks {
                                (block)
                            }
                            hr;
                            p class="text" { (FOOTER) }
                        }
                    }
                }
            }
        }
    }

    /// Produce the complete HTML document
    pub fn finish(self) -> String {
        self.render().into_string()
    }
}

impl RenderSurface for HtmlSurface {
    fn header(&mut self, title: &str, description: &str) -> DashboardResult<()> {
        self.blocks.push(html! {
            div class="section-header" {
                h2 { (title) }
                p { (description) }
            }
        });
        Ok(())
    }

    fn subheader(&mut self, text: &str) -> DashboardResult<()> {
        self.blocks.push(html! { h3 class="subheader" { (text) } });
        Ok(())
    }

    fn chart(&mut self, chart: &ChartSpec) -> DashboardResult<()> {
        let id = format!("chart-{}", self.charts);
        self.charts += 1;

        let script = format!("Plotly.newPlot(\"{}\", {});", id, script_json(chart));
        self.blocks.push(html! {
            div id=(id) class="chart" {}
            script { (PreEscaped(script)) }
        });
        Ok(())
    }

    fn info(&mut self, text: &str) -> DashboardResult<()> {
        self.blocks.push(html! { div class="info" { (text) } });
        Ok(())
    }

    fn text(&mut self, text: &str) -> DashboardResult<()> {
        self.blocks.push(html! { p class="text" { (text) } });
        Ok(())
    }

    fn buttons(&mut self, labels: &[String]) -> DashboardResult<()> {
        self.blocks.push(html! {
            div class="buttons" {
                @for label in labels {
                    button type="button" { (label) }
                }
            }
        });
        Ok(())
    }
}
