//! Chart specifications
//!
//! A [`ChartSpec`] is the structured description of one chart handed to the
//! charting library. It is immutable once built and is mapped onto a typed
//! Plotly plot by [`ChartSpec::to_plot`].

use plotly::common::{ColorScale, ColorScalePalette, Font, Line, Marker, Mode, Title};
use plotly::layout::{Axis as LayoutAxis, BarMode};
use plotly::{Bar, Layout, Pie, Plot, Scatter, Trace};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::{DashboardError, DashboardResult};

/// Transparent background used by every figure
const TRANSPARENT: &str = "rgba(0,0,0,0)";

/// Default text color for figure fonts
const FONT_COLOR: &str = "#2c3e50";

/// Kind of chart to draw
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    Bar,
    Pie,
    Line,
    Scatter,
    GroupedBar,
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartKind::Bar => write!(f, "bar"),
            ChartKind::Pie => write!(f, "pie"),
            ChartKind::Line => write!(f, "line"),
            ChartKind::Scatter => write!(f, "scatter"),
            ChartKind::GroupedBar => write!(f, "grouped-bar"),
        }
    }
}

/// X-axis values shared by every series of a chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Named categories (crop types, programs, pie slices)
    Categories(Vec<String>),
    /// Ordinal or continuous values (years, accuracy percentages)
    Numbers(Vec<f64>),
}

impl Axis {
    /// Build a categorical axis from string-like values
    pub fn categories<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Axis::Categories(values.into_iter().map(Into::into).collect())
    }

    /// Build a numeric axis
    pub fn numbers(values: impl IntoIterator<Item = f64>) -> Self {
        Axis::Numbers(values.into_iter().collect())
    }

    /// Number of x positions
    pub fn len(&self) -> usize {
        match self {
            Axis::Categories(c) => c.len(),
            Axis::Numbers(n) => n.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Display label for the x position at `index`
    pub fn label(&self, index: usize) -> Option<String> {
        match self {
            Axis::Categories(c) => c.get(index).cloned(),
            Axis::Numbers(n) => n.get(index).map(|v| format_number(*v)),
        }
    }

    /// X values for a Plotly trace
    fn values(&self) -> Vec<XValue> {
        match self {
            Axis::Categories(c) => c.iter().cloned().map(XValue::Category).collect(),
            Axis::Numbers(n) => n.iter().copied().map(XValue::Number).collect(),
        }
    }

    /// Display labels for every x position
    fn labels(&self) -> Vec<String> {
        (0..self.len()).filter_map(|i| self.label(i)).collect()
    }

    /// Numeric position of every point; categories use their index
    fn positions(&self) -> Vec<f64> {
        match self {
            Axis::Categories(c) => (0..c.len()).map(|i| i as f64).collect(),
            Axis::Numbers(n) => n.clone(),
        }
    }
}

/// One named sequence of values plotted against the chart's axis
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Series {
    /// Legend name
    pub name: String,
    /// Y values, parallel to the x-axis
    pub values: Vec<f64>,
    /// Either one color for the whole series or one per point
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<String>,
}

impl Series {
    /// Create a series without colors
    pub fn new(name: impl Into<String>, values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            name: name.into(),
            values: values.into_iter().collect(),
            colors: Vec::new(),
        }
    }

    /// Builder method: one color for the whole series
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.colors = vec![color.into()];
        self
    }

    /// Builder method: one color per point
    pub fn colors<S: Into<String>>(mut self, colors: impl IntoIterator<Item = S>) -> Self {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    fn marker(&self) -> Option<Marker> {
        match self.colors.as_slice() {
            [] => None,
            [single] => Some(Marker::new().color(single.clone())),
            many => Some(Marker::new().color_array(many.to_vec())),
        }
    }
}

/// Axis titles
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AxisLabels {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<String>,
}

/// Named colorscale for markers colored by value
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Colorscale {
    Viridis,
    Cividis,
    Blues,
    Greens,
}

impl Colorscale {
    fn palette(self) -> ColorScalePalette {
        match self {
            Colorscale::Viridis => ColorScalePalette::Viridis,
            Colorscale::Cividis => ColorScalePalette::Cividis,
            Colorscale::Blues => ColorScalePalette::Blues,
            Colorscale::Greens => ColorScalePalette::Greens,
        }
    }
}

/// Marker styling for scatter charts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarkerStyle {
    /// Marker size in pixels
    pub size: usize,
    /// Markers are colored by their x value on this scale
    pub colorscale: Colorscale,
}

/// Description of one chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub x: Axis,
    pub series: Vec<Series>,
    #[serde(default)]
    pub axis_labels: AxisLabels,
    /// Hole ratio for donut-style pies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hole: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<MarkerStyle>,
    /// Per-point labels shown on hover
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub point_labels: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover_template: Option<String>,
}

impl ChartSpec {
    /// Create a chart with no series
    pub fn new(kind: ChartKind, title: impl Into<String>, x: Axis) -> Self {
        Self {
            kind,
            title: title.into(),
            x,
            series: Vec::new(),
            axis_labels: AxisLabels::default(),
            hole: None,
            marker: None,
            point_labels: Vec::new(),
            hover_template: None,
        }
    }

    /// Builder method: add a series
    pub fn series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    /// Builder method: x-axis title
    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.axis_labels.x = Some(label.into());
        self
    }

    /// Builder method: y-axis title
    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.axis_labels.y = Some(label.into());
        self
    }

    /// Builder method: pie hole ratio
    pub fn hole(mut self, ratio: f64) -> Self {
        self.hole = Some(ratio);
        self
    }

    /// Builder method: scatter marker styling
    pub fn marker(mut self, size: usize, colorscale: Colorscale) -> Self {
        self.marker = Some(MarkerStyle { size, colorscale });
        self
    }

    /// Builder method: hover labels, one per point
    pub fn point_labels<S: Into<String>>(mut self, labels: impl IntoIterator<Item = S>) -> Self {
        self.point_labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method: Plotly hover template
    pub fn hover_template(mut self, template: impl Into<String>) -> Self {
        self.hover_template = Some(template.into());
        self
    }

    /// Check that every series lines up with the x-axis
    pub fn validate(&self) -> DashboardResult<()> {
        if self.series.is_empty() {
            return Err(DashboardError::EmptyChart(self.title.clone()));
        }

        let expected = self.x.len();
        for series in &self.series {
            if series.values.len() != expected {
                return Err(DashboardError::SeriesLengthMismatch {
                    chart: self.title.clone(),
                    series: series.name.clone(),
                    expected,
                    actual: series.values.len(),
                });
            }
        }

        if !self.point_labels.is_empty() && self.point_labels.len() != expected {
            return Err(DashboardError::SeriesLengthMismatch {
                chart: self.title.clone(),
                series: "point labels".to_string(),
                expected,
                actual: self.point_labels.len(),
            });
        }

        Ok(())
    }

    /// Validate and return self, for use at the end of a builder chain
    pub fn build(self) -> DashboardResult<Self> {
        self.validate()?;
        Ok(self)
    }

    /// Map onto a typed Plotly plot: one trace per series plus the layout
    pub fn to_plot(&self) -> Plot {
        let mut plot = Plot::new();
        for series in &self.series {
            plot.add_trace(self.trace(series));
        }
        plot.set_layout(self.layout());
        plot
    }

    /// The Plotly figure as JSON: `{"data": [...], "layout": {...}}`
    pub fn figure(&self) -> DashboardResult<Value> {
        Ok(serde_json::from_str(&self.to_plot().to_json())?)
    }

    fn trace(&self, series: &Series) -> Box<dyn Trace> {
        let values = series.values.clone();

        match self.kind {
            ChartKind::Bar | ChartKind::GroupedBar => {
                let mut bar = Bar::new(self.x.values(), values).name(&series.name);
                if let Some(marker) = series.marker() {
                    bar = bar.marker(marker);
                }
                if !self.point_labels.is_empty() {
                    bar = bar.text_array(self.point_labels.clone());
                }
                if let Some(template) = &self.hover_template {
                    bar = bar.hover_template(template);
                }
                bar
            }
            ChartKind::Pie => {
                let mut pie = Pie::new(values)
                    .name(&series.name)
                    .labels(self.x.labels());
                if let Some(hole) = self.hole {
                    pie = pie.hole(hole);
                }
                if let Some(template) = &self.hover_template {
                    pie = pie.hover_template(template);
                }
                pie
            }
            ChartKind::Line | ChartKind::Scatter => {
                let mut scatter = Scatter::new(self.x.values(), values).name(&series.name);
                if self.kind == ChartKind::Line {
                    scatter = scatter.mode(Mode::Lines);
                    if let [color] = series.colors.as_slice() {
                        scatter = scatter.line(Line::new().color(color.clone()));
                    }
                } else {
                    scatter = scatter.mode(Mode::Markers);
                    if let Some(style) = &self.marker {
                        scatter = scatter.marker(
                            Marker::new()
                                .size(style.size)
                                .color_array(self.x.positions())
                                .color_scale(ColorScale::Palette(style.colorscale.palette()))
                                .show_scale(true),
                        );
                    } else if let Some(marker) = series.marker() {
                        scatter = scatter.marker(marker);
                    }
                }
                if !self.point_labels.is_empty() {
                    scatter = scatter.text_array(self.point_labels.clone());
                }
                if let Some(template) = &self.hover_template {
                    scatter = scatter.hover_template(template);
                }
                scatter
            }
        }
    }

    fn layout(&self) -> Layout {
        let mut layout = Layout::new()
            .title(Title::with_text(&self.title))
            .plot_background_color(TRANSPARENT)
            .paper_background_color(TRANSPARENT)
            .font(Font::new().color(FONT_COLOR));

        if let Some(x) = &self.axis_labels.x {
            layout = layout.x_axis(LayoutAxis::new().title(Title::with_text(x)));
        }
        if let Some(y) = &self.axis_labels.y {
            layout = layout.y_axis(LayoutAxis::new().title(Title::with_text(y)));
        }
        if self.kind == ChartKind::GroupedBar {
            layout = layout.bar_mode(BarMode::Group);
        }
        // Pie slices take their colors from the colorway
        if self.kind == ChartKind::Pie {
            if let Some(series) = self.series.first().filter(|s| !s.colors.is_empty()) {
                layout = layout.colorway(series.colors.clone());
            }
        }
        layout
    }
}

/// An x value as handed to Plotly: a category name or a number
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum XValue {
    Category(String),
    Number(f64),
}

/// Format a value without a trailing ".0" for whole numbers
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
