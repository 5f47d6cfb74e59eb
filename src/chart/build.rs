//! Chart builders: from a narrow [`Table`] to a [`Chart`].
//!
//! A builder splits rows into one trace per value of an optional color-by
//! column (first-appearance order) and one pane per value of an optional
//! facet column, cycling a qualitative palette so the same category keeps
//! the same color across panes.

use indexmap::{IndexMap, IndexSet};

use crate::chart::figure::{Chart, FacetGrid};
use crate::chart::layout::{Annotation, BarMode, Layout};
use crate::chart::palette;
use crate::chart::trace::{Trace, TraceKind};
use crate::core::Table;
use crate::error::DashResult;

/// Builder for bar charts (stacked by default, optionally grouped).
#[derive(Debug, Clone)]
pub struct BarChart<'a> {
    table: &'a Table,
    x: &'a str,
    y: &'a str,
    color_by: Option<&'a str>,
    text: Option<&'a str>,
    palette: &'static [&'static str],
    bar_mode: BarMode,
    facet: Option<(&'a str, u32)>,
    facet_row_spacing: Option<f64>,
    width: Option<u32>,
    height: Option<u32>,
    x_title: Option<&'a str>,
    y_title: Option<&'a str>,
}

impl<'a> BarChart<'a> {
    #[must_use]
    pub fn new(table: &'a Table, x: &'a str, y: &'a str) -> Self {
        Self {
            table,
            x,
            y,
            color_by: None,
            text: None,
            palette: palette::PLOTLY,
            bar_mode: BarMode::Stack,
            facet: None,
            facet_row_spacing: None,
            width: None,
            height: None,
            x_title: None,
            y_title: None,
        }
    }

    /// Splits rows into one trace per distinct value of `column`.
    #[must_use]
    pub fn color_by(mut self, column: &'a str) -> Self {
        self.color_by = Some(column);
        self
    }

    /// Draws per-point text labels from `column`.
    #[must_use]
    pub fn text(mut self, column: &'a str) -> Self {
        self.text = Some(column);
        self
    }

    #[must_use]
    pub fn palette(mut self, palette: &'static [&'static str]) -> Self {
        self.palette = palette;
        self
    }

    /// Places traces side by side instead of stacking them.
    #[must_use]
    pub fn grouped(mut self) -> Self {
        self.bar_mode = BarMode::Group;
        self
    }

    /// Splits the chart into small-multiple panes by `column`.
    #[must_use]
    pub fn facet(mut self, column: &'a str, wrap: u32) -> Self {
        self.facet = Some((column, wrap));
        self
    }

    #[must_use]
    pub fn facet_row_spacing(mut self, spacing: f64) -> Self {
        self.facet_row_spacing = Some(spacing);
        self
    }

    #[must_use]
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    #[must_use]
    pub fn x_title(mut self, title: &'a str) -> Self {
        self.x_title = Some(title);
        self
    }

    #[must_use]
    pub fn y_title(mut self, title: &'a str) -> Self {
        self.y_title = Some(title);
        self
    }

    pub fn build(self) -> DashResult<Chart> {
        let spec = TraceSpec {
            kind: TraceKind::Bar,
            x: self.x,
            y: self.y,
            color_by: self.color_by,
            text: self.text,
            facet: self.facet.map(|(column, _)| column),
            palette: self.palette,
        };
        let (traces, facet_values) = spec.split(self.table)?;

        let mut chart = Chart {
            traces,
            layout: base_layout(
                self.x,
                self.y,
                self.x_title,
                self.y_title,
                self.color_by,
                self.width,
                self.height,
            ),
            facets: None,
        };
        chart.layout.bar_mode = self.bar_mode;
        attach_facets(
            &mut chart,
            self.facet,
            self.facet_row_spacing,
            facet_values,
        );
        Ok(chart)
    }
}

/// Builder for line charts.
#[derive(Debug, Clone)]
pub struct LineChart<'a> {
    table: &'a Table,
    x: &'a str,
    y: &'a str,
    color_by: Option<&'a str>,
    palette: &'static [&'static str],
    x_title: Option<&'a str>,
    y_title: Option<&'a str>,
}

impl<'a> LineChart<'a> {
    #[must_use]
    pub fn new(table: &'a Table, x: &'a str, y: &'a str) -> Self {
        Self {
            table,
            x,
            y,
            color_by: None,
            palette: palette::PLOTLY,
            x_title: None,
            y_title: None,
        }
    }

    /// Splits rows into one line per distinct value of `column`.
    #[must_use]
    pub fn color_by(mut self, column: &'a str) -> Self {
        self.color_by = Some(column);
        self
    }

    #[must_use]
    pub fn palette(mut self, palette: &'static [&'static str]) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn x_title(mut self, title: &'a str) -> Self {
        self.x_title = Some(title);
        self
    }

    #[must_use]
    pub fn y_title(mut self, title: &'a str) -> Self {
        self.y_title = Some(title);
        self
    }

    pub fn build(self) -> DashResult<Chart> {
        let spec = TraceSpec {
            kind: TraceKind::Line,
            x: self.x,
            y: self.y,
            color_by: self.color_by,
            text: None,
            facet: None,
            palette: self.palette,
        };
        let (traces, _) = spec.split(self.table)?;

        Ok(Chart {
            traces,
            layout: base_layout(
                self.x,
                self.y,
                self.x_title,
                self.y_title,
                self.color_by,
                None,
                None,
            ),
            facets: None,
        })
    }
}

struct TraceSpec<'a> {
    kind: TraceKind,
    x: &'a str,
    y: &'a str,
    color_by: Option<&'a str>,
    text: Option<&'a str>,
    facet: Option<&'a str>,
    palette: &'static [&'static str],
}

impl TraceSpec<'_> {
    /// Splits table rows into traces keyed by (color value, facet value),
    /// both in first-appearance order.
    fn split(&self, table: &Table) -> DashResult<(Vec<Trace>, Vec<String>)> {
        let x_index = table.require_column(self.x)?;
        let y_index = table.require_column(self.y)?;
        let color_index = self
            .color_by
            .map(|column| table.require_column(column))
            .transpose()?;
        let text_index = self
            .text
            .map(|column| table.require_column(column))
            .transpose()?;
        let facet_index = self
            .facet
            .map(|column| table.require_column(column))
            .transpose()?;

        let mut groups: IndexMap<(String, String), Trace> = IndexMap::new();
        let mut color_order: IndexSet<String> = IndexSet::new();
        let mut facet_values: IndexSet<String> = IndexSet::new();

        for row in table.rows() {
            let color_value = color_index.map(|index| row[index].to_string());
            let facet_value = facet_index.map(|index| row[index].to_string());
            if let Some(value) = &facet_value {
                facet_values.insert(value.clone());
            }

            let key = (
                color_value.clone().unwrap_or_default(),
                facet_value.clone().unwrap_or_default(),
            );
            let trace = groups.entry(key).or_insert_with(|| {
                let paint_index = match &color_value {
                    Some(value) => {
                        color_order.insert(value.clone());
                        color_order.get_index_of(value).unwrap_or_default()
                    }
                    None => 0,
                };
                let mut trace = Trace::new(self.kind, Vec::new(), Vec::new());
                trace.name = color_value.clone();
                trace.color = self
                    .palette
                    .get(paint_index % self.palette.len().max(1))
                    .map(|&color| color.to_owned());
                trace.facet = facet_value.clone();
                trace.text = text_index.map(|_| Vec::new());
                trace
            });

            trace.x.push(row[x_index].clone());
            trace.y.push(row[y_index].clone());
            if let (Some(index), Some(text)) = (text_index, trace.text.as_mut()) {
                text.push(row[index].to_string());
            }
        }

        Ok((
            groups.into_values().collect(),
            facet_values.into_iter().collect(),
        ))
    }
}

fn base_layout(
    x: &str,
    y: &str,
    x_title: Option<&str>,
    y_title: Option<&str>,
    color_by: Option<&str>,
    width: Option<u32>,
    height: Option<u32>,
) -> Layout {
    let mut layout = Layout::default();
    layout.x_axis.title = x_title.unwrap_or(x).to_owned();
    layout.y_axis.title = y_title.unwrap_or(y).to_owned();
    layout.legend.title = color_by.map(str::to_owned);
    layout.width = width;
    layout.height = height;
    layout
}

fn attach_facets(
    chart: &mut Chart,
    facet: Option<(&str, u32)>,
    row_spacing: Option<f64>,
    facet_values: Vec<String>,
) {
    let Some((column, wrap)) = facet else {
        return;
    };
    chart.facets = Some(FacetGrid {
        column: column.to_owned(),
        wrap,
        row_spacing,
    });
    chart.layout.annotations = facet_values
        .into_iter()
        .map(|text| Annotation { text })
        .collect();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Cell;

    fn sample_table() -> Table {
        let mut table = Table::new(["x", "y", "group"]);
        for (x, y, group) in [
            ("Q1", 10.0, "2019"),
            ("Q2", 11.0, "2019"),
            ("Q1", 8.0, "2020"),
            ("Q2", 9.0, "2020"),
        ] {
            table
                .push_row(vec![Cell::text(x), Cell::Number(y), Cell::text(group)])
                .expect("arity");
        }
        table
    }

    #[test]
    fn color_by_splits_one_trace_per_group_in_first_appearance_order() {
        let table = sample_table();
        let chart = BarChart::new(&table, "x", "y")
            .color_by("group")
            .grouped()
            .build()
            .expect("build");

        assert_eq!(chart.trace_count(), 2);
        assert_eq!(chart.traces()[0].name.as_deref(), Some("2019"));
        assert_eq!(chart.traces()[1].name.as_deref(), Some("2020"));
        assert_eq!(chart.layout.bar_mode, BarMode::Group);
        assert_eq!(chart.traces()[0].len(), 2);
    }

    #[test]
    fn same_group_keeps_the_same_palette_color_across_facets() {
        let mut table = Table::new(["x", "y", "group", "pane"]);
        for (x, y, group, pane) in [
            ("a", 1.0, "g1", "p1"),
            ("a", 2.0, "g2", "p1"),
            ("a", 3.0, "g1", "p2"),
            ("a", 4.0, "g2", "p2"),
        ] {
            table
                .push_row(vec![
                    Cell::text(x),
                    Cell::Number(y),
                    Cell::text(group),
                    Cell::text(pane),
                ])
                .expect("arity");
        }

        let chart = BarChart::new(&table, "x", "y")
            .color_by("group")
            .facet("pane", 2)
            .build()
            .expect("build");

        assert_eq!(chart.trace_count(), 4);
        let color_of = |group: &str, pane: &str| {
            chart
                .traces()
                .iter()
                .find(|t| t.name.as_deref() == Some(group) && t.facet.as_deref() == Some(pane))
                .and_then(|t| t.color.clone())
        };
        assert_eq!(color_of("g1", "p1"), color_of("g1", "p2"));
        assert_ne!(color_of("g1", "p1"), color_of("g2", "p1"));

        let annotations: Vec<&str> = chart
            .layout
            .annotations
            .iter()
            .map(|a| a.text.as_str())
            .collect();
        assert_eq!(annotations, ["p1", "p2"]);
    }

    #[test]
    fn missing_column_fails_the_build() {
        let table = sample_table();
        assert!(BarChart::new(&table, "x", "nope").build().is_err());
    }
}
