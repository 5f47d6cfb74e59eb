//! The figure normalizer: one visual theme for every chart on the dashboard.

use serde::{Deserialize, Serialize};

use crate::chart::figure::Chart;
use crate::chart::layout::{HAnchor, HoverMode, Legend, Margin, Orientation, TickFont, Title, VAnchor};

/// Shared visual theme, passed explicitly into the normalizer.
///
/// An immutable configuration value; pages derive their variant (a different
/// default margin) with [`Theme::with_margin`] instead of mutating shared
/// state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub font_size: u32,
    pub tick_font: TickFont,
    pub grid_color: String,
    pub plot_background: String,
    /// Page default margin applied when a chart has no explicit one.
    pub margin: Margin,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            font_size: 12,
            tick_font: TickFont::new("Arial", 10, "rgb(82,82,82)"),
            grid_color: "rgb(243,243,243)".to_owned(),
            plot_background: "white".to_owned(),
            margin: Margin::new(30, 30, 120, 50),
        }
    }
}

impl Theme {
    #[must_use]
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }
}

/// Applies the uniform theme with the theme's default margin.
pub fn normalize<'a>(chart: &'a mut Chart, title: &str, theme: &Theme) -> &'a mut Chart {
    normalize_with_margin(chart, title, theme, theme.margin)
}

/// Applies the uniform theme to `chart` and returns it.
///
/// Mutates presentation only: the title is centered, the x-axis label is
/// cleared and its tick font fixed, y gridlines and the plot background take
/// the theme colors, hovering unifies all series at the pointed x, per-trace
/// hover overrides are cleared, and the legend moves above the plot,
/// horizontally centered. Series data, trace count, and trace order are
/// never touched.
pub fn normalize_with_margin<'a>(
    chart: &'a mut Chart,
    title: &str,
    theme: &Theme,
    margin: Margin,
) -> &'a mut Chart {
    let layout = &mut chart.layout;
    layout.title = Title {
        text: title.to_owned(),
        x: 0.5,
    };
    layout.font_size = theme.font_size;
    layout.x_axis.title.clear();
    layout.x_axis.show_tick_labels = true;
    layout.x_axis.tick_font = Some(theme.tick_font.clone());
    layout.y_axis.grid_color = Some(theme.grid_color.clone());
    layout.y_axis.show_grid = true;
    layout.plot_background = theme.plot_background.clone();
    layout.hover_mode = HoverMode::XUnified;
    layout.legend = Legend {
        title: None,
        orientation: Orientation::Horizontal,
        x: 0.5,
        y: 1.0,
        x_anchor: HAnchor::Center,
        y_anchor: VAnchor::Bottom,
    };
    layout.margin = Some(margin);

    for trace in &mut chart.traces {
        trace.hover_template = None;
    }
    chart
}
