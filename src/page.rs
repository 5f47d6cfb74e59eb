//! Page layout structure handed to the display host.

use serde::{Deserialize, Serialize};

use crate::chart::Chart;
use crate::error::{DashError, DashResult};

/// One element of a page layout, in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    /// Section heading.
    Heading(String),
    /// Smaller underlined heading introducing a chart group.
    Subheading(String),
    /// Markdown-formatted text block.
    Markdown(String),
    /// Inline text ending in a hyperlink.
    Link { text: String, href: String },
    /// Static image asset, by asset name.
    Image { asset: String },
    Chart(Box<Chart>),
}

impl Block {
    #[must_use]
    pub fn chart(chart: Chart) -> Self {
        Self::Chart(Box::new(chart))
    }
}

/// An ordered sequence of charts and static text; immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub title: String,
    pub blocks: Vec<Block>,
}

impl Page {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// All charts on the page, in display order.
    pub fn charts(&self) -> impl Iterator<Item = &Chart> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Chart(chart) => Some(chart.as_ref()),
            _ => None,
        })
    }

    #[must_use]
    pub fn chart_count(&self) -> usize {
        self.charts().count()
    }

    /// Serializes the page to pretty JSON for display hosts.
    pub fn to_json_pretty(&self) -> DashResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DashError::InvalidData(format!("failed to serialize page: {e}")))
    }

    /// Deserializes a page from JSON.
    pub fn from_json_str(input: &str) -> DashResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| DashError::InvalidData(format!("failed to parse page: {e}")))
    }
}
