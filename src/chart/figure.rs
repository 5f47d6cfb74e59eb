use serde::{Deserialize, Serialize};

use crate::chart::layout::Layout;
use crate::chart::trace::{LineMode, TextPosition, Trace};
use crate::error::{DashError, DashResult};

/// Facet arrangement of a chart split into small-multiple panes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetGrid {
    /// Column whose values name the panes.
    pub column: String,
    /// Panes per row before wrapping.
    pub wrap: u32,
    pub row_spacing: Option<f64>,
}

/// A styled collection of traces plus title/legend/axis configuration.
///
/// Constructed per page load from a [`crate::core::Table`], mutated in place
/// by [`crate::chart::normalize`], then handed immutably to the page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Chart {
    pub traces: Vec<Trace>,
    pub layout: Layout,
    pub facets: Option<FacetGrid>,
}

impl Chart {
    #[must_use]
    pub fn trace_count(&self) -> usize {
        self.traces.len()
    }

    #[must_use]
    pub fn traces(&self) -> &[Trace] {
        &self.traces
    }

    pub fn traces_mut(&mut self) -> &mut [Trace] {
        &mut self.traces
    }

    /// Renames traces in order; extra names are ignored.
    pub fn set_trace_names(&mut self, names: &[&str]) {
        for (trace, name) in self.traces.iter_mut().zip(names) {
            trace.name = Some((*name).to_owned());
        }
    }

    /// Sets the draw mode of every line trace.
    pub fn set_line_mode(&mut self, mode: LineMode) {
        for trace in &mut self.traces {
            trace.mode = mode;
        }
    }

    /// Applies one hover template to every trace.
    pub fn set_hover_template(&mut self, template: &str) {
        for trace in &mut self.traces {
            trace.hover_template = Some(template.to_owned());
        }
    }

    /// Fixes the bar width of every trace, in axis units.
    pub fn set_bar_width(&mut self, width: f64) {
        for trace in &mut self.traces {
            trace.width = Some(width);
        }
    }

    pub fn set_text_position(&mut self, position: TextPosition) {
        for trace in &mut self.traces {
            trace.text_position = position;
        }
    }

    pub fn set_text_font_size(&mut self, size: u32) {
        for trace in &mut self.traces {
            trace.text_font_size = Some(size);
        }
    }

    /// Serializes the chart to pretty JSON for display hosts.
    pub fn to_json_pretty(&self) -> DashResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DashError::InvalidData(format!("failed to serialize chart: {e}")))
    }

    /// Deserializes a chart from JSON.
    pub fn from_json_str(input: &str) -> DashResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| DashError::InvalidData(format!("failed to parse chart: {e}")))
    }
}
