use serde::{Deserialize, Serialize};

use crate::core::Cell;

/// Visual family of one trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraceKind {
    Bar,
    Line,
}

/// Draw mode for line traces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineMode {
    #[default]
    Lines,
    MarkersLines,
}

/// Placement of per-point text labels relative to the mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextPosition {
    #[default]
    Auto,
    Inside,
    Outside,
}

/// One named series of (x, y) observations feeding a single chart mark run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub kind: TraceKind,
    /// Legend entry; `None` for single-series charts.
    pub name: Option<String>,
    pub x: Vec<Cell>,
    pub y: Vec<Cell>,
    /// Per-point text labels drawn on the marks.
    pub text: Option<Vec<String>>,
    pub mode: LineMode,
    /// CSS-style color string; `None` lets the host pick.
    pub color: Option<String>,
    /// Fixed bar width in axis units.
    pub width: Option<f64>,
    pub text_position: TextPosition,
    pub text_font_size: Option<u32>,
    /// Per-trace hover override; `None` defers to the layout's hover mode.
    pub hover_template: Option<String>,
    pub show_legend: Option<bool>,
    /// Facet pane this trace is drawn in, when the chart is faceted.
    pub facet: Option<String>,
}

impl Trace {
    #[must_use]
    pub fn new(kind: TraceKind, x: Vec<Cell>, y: Vec<Cell>) -> Self {
        Self {
            kind,
            name: None,
            x,
            y,
            text: None,
            mode: LineMode::default(),
            color: None,
            width: None,
            text_position: TextPosition::default(),
            text_font_size: None,
            hover_template: None,
            show_legend: None,
            facet: None,
        }
    }

    /// Number of observations in this trace.
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}
