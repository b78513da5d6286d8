//! Display blocks
//!
//! A rendered section is an ordered list of blocks. Surfaces turn each block
//! into markup or terminal output.

use serde::{Deserialize, Serialize};

use super::chart::ChartSpec;

/// One display instruction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Styled section header
    Header { title: String, description: String },
    /// Subheader introducing the chart that follows it
    Subheader { text: String },
    /// A chart
    Chart { chart: ChartSpec },
    /// Highlighted informational callout
    Info { text: String },
    /// Plain paragraph
    Text { text: String },
    /// Row of resource buttons
    Buttons { labels: Vec<String> },
}

impl Block {
    pub fn header(title: impl Into<String>, description: impl Into<String>) -> Self {
        Block::Header {
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn subheader(text: impl Into<String>) -> Self {
        Block::Subheader { text: text.into() }
    }

    pub fn chart(chart: ChartSpec) -> Self {
        Block::Chart { chart }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Block::Info { text: text.into() }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Block::Text { text: text.into() }
    }

    pub fn buttons<S: Into<String>>(labels: impl IntoIterator<Item = S>) -> Self {
        Block::Buttons {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Short name of the block kind, as used in the JSON `type` tag
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Header { .. } => "header",
            Block::Subheader { .. } => "subheader",
            Block::Chart { .. } => "chart",
            Block::Info { .. } => "info",
            Block::Text { .. } => "text",
            Block::Buttons { .. } => "buttons",
        }
    }

    /// The chart carried by this block, if any
    pub fn as_chart(&self) -> Option<&ChartSpec> {
        match self {
            Block::Chart { chart } => Some(chart),
            _ => None,
        }
    }
}
