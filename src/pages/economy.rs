//! Economy page (oikonomia): core macroeconomic indicators.
//!
//! Column shapes per dataset are documented on each chart function; the
//! Eurostat exports keep their raw composite header names (e.g.
//! `freq;unit;na_item;geo\TIME_PERIOD`).

use std::path::Path;

use crate::chart::{
    AxisKind, BarChart, Chart, LineChart, LineMode, TextPosition, Theme, TickFont, normalize,
    palette,
};
use crate::core::{Unpivot, coerce_date_format, coerce_numeric, labels, load_csv, relabel};
use crate::error::DashResult;
use crate::page::{Block, Page};
use crate::pages::HEADER_TEXT;

/// Values the Eurostat exports use for missing observations.
const MISSING: &[&str] = &[":", "NA"];

/// Metadata columns carried by the wide Eurostat exports.
const WIDE_METADATA: [&str; 2] = ["Unnamed: 0", "country_code"];

const INTRO: &str = "Πως εξελίχθηκαν βασικά οικονομικά μεγεθη της οικονομίας όπως το ΑΕΠ, \
η ανεργία και ο πληθωρισμός. Ακόμη, απεικονίζονται το ισοζύγιο πληρωμών και οι ξένες \
άμεσες επενδύσεις, προκειμένου να εξεταστεί το σύνολο των οικονομικών συναλλαγών των \
Ελλήνων κατοίκων με τον υπόλοιπο κόσμο και η πρόθεση ξένων επενδυτών να αποκτήσουν \
διαρκές συμφέρον σε επιχειρήσεις της χώρας.";

fn theme() -> Theme {
    Theme::default()
}

#[must_use]
pub fn page(data_dir: &Path) -> Page {
    let mut page = Page::new("Οικονομία");
    page.push(Block::Markdown(HEADER_TEXT.to_owned()));
    page.push(Block::Heading("ΟΙΚΟΝΟΜΙΚΕΣ ΕΞΕΛΙΞΕΙΣ".to_owned()));
    page.push(Block::Markdown(INTRO.to_owned()));
    match charts(data_dir) {
        Ok(charts) => {
            for chart in charts {
                page.push(Block::chart(chart));
            }
        }
        Err(error) => tracing::warn!(%error, page = "oikonomia", "skipping charts"),
    }
    page
}

fn charts(data_dir: &Path) -> DashResult<Vec<Chart>> {
    Ok(vec![
        gdp(data_dir)?,
        expenditure(data_dir)?,
        income(data_dir)?,
        hicp(data_dir)?,
        hicp_components(data_dir)?,
        unemployment(data_dir)?,
        current_account(data_dir)?,
        foreign_direct_investment(data_dir)?,
    ])
}

/// `gdp_2.csv`: quarter, OBS_VALUE, year, metavoli.
fn gdp(data_dir: &Path) -> DashResult<Chart> {
    let table = load_csv(data_dir.join("gdp_2.csv"))?;
    let table = coerce_date_format(&table, "year", "%Y")?;

    let mut chart = BarChart::new(&table, "quarter", "OBS_VALUE")
        .color_by("year")
        .grouped()
        .text("metavoli")
        .palette(palette::SET2)
        .y_title("")
        .build()?;
    normalize(
        &mut chart,
        "ΑΕΠ (εκατ. ευρώ) & τριμηνιαία μεταβολή ανά έτος (%)",
        &theme(),
    );
    chart.set_trace_names(&["2019", "2020", "2021"]);
    chart.set_hover_template("%{y}");
    Ok(chart)
}

/// `expenditure.csv`: coded component column, value, date, metavoli.
fn expenditure(data_dir: &Path) -> DashResult<Chart> {
    let table = load_csv(data_dir.join("expenditure.csv"))?;
    let table = relabel(&table, labels::lookup("expenditure")?);
    let table = coerce_numeric(&table, "value", MISSING)?;
    let table = coerce_date_format(&table, "date", "%Y")?;

    let mut chart = BarChart::new(&table, "freq;unit;na_item;geo\\TIME_PERIOD", "value")
        .color_by("date")
        .grouped()
        .text("metavoli")
        .palette(palette::SET2)
        .y_title("")
        .build()?;
    normalize(
        &mut chart,
        "Δαπάνες ανά κατηγορία & ετήσια μεταβολή (%) (2015=100)",
        &theme(),
    );
    chart.set_trace_names(&["2019", "2020"]);
    chart.set_hover_template("%{y}");
    Ok(chart)
}

/// `income.csv`: na_item, OBS_VALUE, TIME_PERIOD, metavoli.
fn income(data_dir: &Path) -> DashResult<Chart> {
    let table = load_csv(data_dir.join("income.csv"))?;
    let table = relabel(&table, labels::lookup("income")?);
    let table = coerce_date_format(&table, "TIME_PERIOD", "%Y")?;

    let mut chart = BarChart::new(&table, "na_item", "OBS_VALUE")
        .color_by("TIME_PERIOD")
        .grouped()
        .text("metavoli")
        .palette(palette::PASTEL1)
        .y_title("")
        .build()?;
    normalize(
        &mut chart,
        "Εισοδήματα παραγωγικών συντελεστών & μεταβολή (%) (εκατ. ευρώ σε τρέχουσες τιμές)",
        &theme(),
    );
    chart.set_trace_names(&["2019", "2020"]);
    chart.set_hover_template("%{y}");
    Ok(chart)
}

/// `hicp.csv`: wide multi-country export, one column per month; only the
/// Greek series `M;RCH_A;CP00;EL` is charted.
fn hicp(data_dir: &Path) -> DashResult<Chart> {
    let table = load_csv(data_dir.join("hicp.csv"))?;
    let narrow = Unpivot::new("freq;unit;coicop;geo\\TIME_PERIOD")
        .exclude(WIDE_METADATA)
        .retain_id("M;RCH_A;CP00;EL")
        .with_columns("country", "date", "index_value")
        .apply(&table)?;
    let narrow = coerce_numeric(&narrow, "index_value", MISSING)?;

    let mut chart = LineChart::new(&narrow, "date", "index_value")
        .palette(palette::TEAL)
        .x_title("Ημερομηνία")
        .y_title("Τιμή")
        .build()?;
    normalize(
        &mut chart,
        "Εξέλιξη Εναρμονισμένου Δείκτη Τιμών Καταναλωτή (ετήσιος ρυθμός μεταβολής)",
        &theme(),
    );
    chart.set_line_mode(LineMode::MarkersLines);
    Ok(chart)
}

/// `components.csv`: coded category column plus `metavoli `; the value
/// column name carries a trailing space in the source export.
fn hicp_components(data_dir: &Path) -> DashResult<Chart> {
    let table = load_csv(data_dir.join("components.csv"))?;
    let table = relabel(&table, labels::lookup("hicp_components")?);

    let mut chart = BarChart::new(&table, "freq;unit;coicop;geo\\TIME_PERIOD", "metavoli ")
        .color_by("freq;unit;coicop;geo\\TIME_PERIOD")
        .palette(palette::DARK24)
        .y_title("")
        .build()?;
    normalize(&mut chart, "Μεταβολή μέσου Εν.ΔΤΚ 2020 ανά κατηγορία", &theme());

    let x_axis = &mut chart.layout.x_axis;
    x_axis.show_grid = true;
    x_axis.grid_color = Some("LightGrey".to_owned());
    x_axis.tick_font = Some(TickFont::new("Arial", 11, "black"));
    chart.layout.y_axis.grid_color = Some("LightGrey".to_owned());
    chart.layout.show_legend = false;
    Ok(chart)
}

/// `unemployment_age.csv`: wide export, one row per age-group series.
fn unemployment(data_dir: &Path) -> DashResult<Chart> {
    let table = load_csv(data_dir.join("unemployment_age.csv"))?;
    let narrow = Unpivot::new("freq;s_adj;age;unit;sex;geo\\TIME_PERIOD")
        .exclude(WIDE_METADATA)
        .with_columns("age", "date", "index_value")
        .apply(&table)?;
    let narrow = coerce_numeric(&narrow, "index_value", MISSING)?;

    let mut chart = LineChart::new(&narrow, "date", "index_value")
        .color_by("age")
        .palette(palette::TEAL_TRIO)
        .y_title("")
        .build()?;
    normalize(&mut chart, "Εξέλιξη ποσοστού ανεργίας", &theme());
    chart.set_line_mode(LineMode::MarkersLines);
    if let Some(first) = chart.traces_mut().first_mut() {
        first.show_legend = Some(true);
    }
    chart.set_trace_names(&["Σύνολο", "25-74", "15-24"]);
    Ok(chart)
}

/// `current_account.csv`: TIME_PERIOD, OBS_VALUE, bop_item.
fn current_account(data_dir: &Path) -> DashResult<Chart> {
    let table = load_csv(data_dir.join("current_account.csv"))?;
    let table = relabel(&table, labels::lookup("current_account")?);

    let mut chart = BarChart::new(&table, "TIME_PERIOD", "OBS_VALUE")
        .color_by("bop_item")
        .palette(palette::SET2)
        .y_title("Τιμή")
        .build()?;
    normalize(
        &mut chart,
        "Ισοζύγιο τρεχουσών συναλλαγών (εκατ. ευρώ)",
        &theme(),
    );
    // quarter labels would otherwise be read as dates
    chart.layout.x_axis.kind = AxisKind::Category;
    chart.set_bar_width(0.3);
    Ok(chart)
}

/// `xae.csv`: year, value, klados (transliterated sector codes).
fn foreign_direct_investment(data_dir: &Path) -> DashResult<Chart> {
    let table = load_csv(data_dir.join("xae.csv"))?;
    let table = relabel(&table, labels::lookup("fdi_sectors")?);

    let mut chart = BarChart::new(&table, "year", "value")
        .color_by("klados")
        .grouped()
        .text("value")
        .palette(palette::SET2)
        .y_title("Τιμή")
        .build()?;
    normalize(&mut chart, "Ξένες άμεσες επενδύσεις (εκατ. ευρώ)", &theme());
    chart.layout.x_axis.kind = AxisKind::Category;
    chart.set_bar_width(0.3);
    chart.set_text_position(TextPosition::Inside);
    chart.set_hover_template("%{y}");
    Ok(chart)
}
