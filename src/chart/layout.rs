use serde::{Deserialize, Serialize};

/// Chart title and its horizontal position (0 = left edge, 1 = right edge).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
    pub x: f64,
}

impl Default for Title {
    fn default() -> Self {
        Self {
            text: String::new(),
            x: 0.0,
        }
    }
}

/// Font used for axis tick labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickFont {
    pub family: String,
    pub size: u32,
    pub color: String,
}

impl TickFont {
    #[must_use]
    pub fn new(family: impl Into<String>, size: u32, color: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            size,
            color: color.into(),
        }
    }
}

/// Tick treatment of an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AxisKind {
    /// Let the host infer numeric/date/category ticks from the data.
    #[default]
    Auto,
    /// Force categorical ticks (used for quarter/year labels that would
    /// otherwise be read as dates or numbers).
    Category,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Axis {
    pub title: String,
    pub show_tick_labels: bool,
    pub tick_font: Option<TickFont>,
    pub grid_color: Option<String>,
    pub show_grid: bool,
    pub kind: AxisKind,
}

/// How hover tooltips aggregate values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HoverMode {
    /// All series' values at the pointed x shown together in one tooltip.
    #[default]
    XUnified,
    X,
    Y,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HAnchor {
    #[default]
    Auto,
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VAnchor {
    #[default]
    Auto,
    Top,
    Middle,
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Legend {
    pub title: Option<String>,
    pub orientation: Orientation,
    pub x: f64,
    pub y: f64,
    pub x_anchor: HAnchor,
    pub y_anchor: VAnchor,
}

/// Plot margins in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margin {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Margin {
    #[must_use]
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }
}

/// How bar traces sharing an x position are arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BarMode {
    #[default]
    Stack,
    Group,
}

/// Free-standing text placed over the plot (facet pane titles).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub text: String,
}

/// Presentation configuration of a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub title: Title,
    /// Base font size for all chart text.
    pub font_size: u32,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub plot_background: String,
    pub hover_mode: HoverMode,
    pub legend: Legend,
    pub show_legend: bool,
    pub bar_mode: BarMode,
    pub margin: Option<Margin>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub annotations: Vec<Annotation>,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            title: Title::default(),
            font_size: 12,
            x_axis: Axis::default(),
            y_axis: Axis::default(),
            plot_background: String::new(),
            hover_mode: HoverMode::default(),
            legend: Legend::default(),
            show_legend: true,
            bar_mode: BarMode::default(),
            margin: None,
            width: None,
            height: None,
            annotations: Vec::new(),
        }
    }
}
