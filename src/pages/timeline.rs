//! Pandemic timeline page (pandimia): epidemiological series.
//!
//! Weekly aggregates as published by the national public health agency;
//! dates in the exports are day-first.

use std::path::Path;

use crate::chart::{BarChart, Chart, LineChart, LineMode, Theme, normalize, palette};
use crate::core::{DateOrder, Unpivot, coerce_date, labels, load_csv, relabel};
use crate::error::DashResult;
use crate::page::{Block, Page};
use crate::pages::HEADER_TEXT;

const INTRO: &str = "Η εξέλιξη των βασικών επιδημιολογικών δεικτών της πανδημίας στην \
Ελλάδα: εβδομαδιαία νέα κρούσματα και θάνατοι, διασωληνωμένοι ασθενείς σε ΜΕΘ, και η \
πορεία της εμβολιαστικής κάλυψης ανά ηλικιακή ομάδα. Πηγή δεδομένων: ΕΟΔΥ.";

fn theme() -> Theme {
    Theme::default()
}

#[must_use]
pub fn page(data_dir: &Path) -> Page {
    let mut page = Page::new("Εξέλιξη Πανδημίας");
    page.push(Block::Markdown(HEADER_TEXT.to_owned()));
    page.push(Block::Heading("ΕΞΕΛΙΞΗ ΠΑΝΔΗΜΙΑΣ".to_owned()));
    page.push(Block::Markdown(INTRO.to_owned()));
    match charts(data_dir) {
        Ok(charts) => {
            for chart in charts {
                page.push(Block::chart(chart));
            }
        }
        Err(error) => tracing::warn!(%error, page = "pandimia", "skipping charts"),
    }
    page
}

fn charts(data_dir: &Path) -> DashResult<Vec<Chart>> {
    Ok(vec![
        weekly_cases(data_dir)?,
        weekly_deaths(data_dir)?,
        intubated(data_dir)?,
        vaccination_coverage(data_dir)?,
    ])
}

/// `kroysmata.csv`: date, kroysmata.
fn weekly_cases(data_dir: &Path) -> DashResult<Chart> {
    let table = load_csv(data_dir.join("kroysmata.csv"))?;
    let table = coerce_date(&table, "date", DateOrder::DayFirst)?;

    let mut chart = LineChart::new(&table, "date", "kroysmata")
        .palette(palette::TEAL)
        .x_title("Ημερομηνία")
        .y_title("")
        .build()?;
    normalize(&mut chart, "Εβδομαδιαία νέα κρούσματα COVID-19", &theme());
    chart.set_line_mode(LineMode::MarkersLines);
    Ok(chart)
}

/// `thanatoi.csv`: date, thanatoi.
fn weekly_deaths(data_dir: &Path) -> DashResult<Chart> {
    let table = load_csv(data_dir.join("thanatoi.csv"))?;
    let table = coerce_date(&table, "date", DateOrder::DayFirst)?;

    let mut chart = BarChart::new(&table, "date", "thanatoi")
        .palette(palette::SET2)
        .y_title("")
        .build()?;
    normalize(&mut chart, "Εβδομαδιαίοι θάνατοι με COVID-19", &theme());
    chart.set_hover_template("%{y}");
    Ok(chart)
}

/// `diasolinomenoi.csv`: date, diasolinomenoi.
fn intubated(data_dir: &Path) -> DashResult<Chart> {
    let table = load_csv(data_dir.join("diasolinomenoi.csv"))?;
    let table = coerce_date(&table, "date", DateOrder::DayFirst)?;

    let mut chart = LineChart::new(&table, "date", "diasolinomenoi")
        .palette(palette::DEEP_TEAL)
        .y_title("")
        .build()?;
    normalize(&mut chart, "Διασωληνωμένοι ασθενείς σε ΜΕΘ", &theme());
    chart.set_line_mode(LineMode::MarkersLines);
    Ok(chart)
}

/// `emvoliasmoi.csv`: wide export with one column per dose
/// (ilikia, dosi_1, dosi_full); percentages per age group.
fn vaccination_coverage(data_dir: &Path) -> DashResult<Chart> {
    let table = load_csv(data_dir.join("emvoliasmoi.csv"))?;
    let narrow = Unpivot::new("ilikia")
        .with_columns("ilikia", "dosi", "pososto")
        .apply(&table)?;
    let narrow = relabel(&narrow, labels::lookup("vaccine_doses")?);

    let mut chart = BarChart::new(&narrow, "ilikia", "pososto")
        .color_by("dosi")
        .grouped()
        .palette(palette::SET2)
        .y_title("")
        .build()?;
    normalize(
        &mut chart,
        "Εμβολιαστική κάλυψη ανά ηλικιακή ομάδα (%)",
        &theme(),
    );
    chart.set_hover_template("%{y}%");
    Ok(chart)
}
