use std::path::{Path, PathBuf};

use covid_dash_rs::chart::{LineChart, Orientation, palette};
use covid_dash_rs::core::load_csv;
use covid_dash_rs::{Block, Page, Route, Theme, normalize};

fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("datasets")
}

#[test]
fn single_series_dataset_round_trips_through_chart_construction() {
    let fixture = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/single_series.csv");
    let table = load_csv(fixture).expect("load fixture");
    assert_eq!(table.row_count(), 10);

    let mut chart = LineChart::new(&table, "date", "value")
        .palette(palette::TEAL)
        .build()
        .expect("build");
    normalize(&mut chart, "Test", &Theme::default());

    assert_eq!(chart.layout.title.text, "Test");
    assert_eq!(chart.layout.legend.orientation, Orientation::Horizontal);
    assert_eq!(chart.trace_count(), 1);

    let loaded: Vec<f64> = table
        .column("value")
        .expect("value column")
        .iter()
        .filter_map(|cell| cell.as_number())
        .collect();
    let charted: Vec<f64> = chart.traces()[0]
        .y
        .iter()
        .filter_map(|cell| cell.as_number())
        .collect();
    assert_eq!(charted, loaded);
}

#[test]
fn economy_page_builds_all_eight_charts() {
    let page = Route::Economy.page(&data_dir());
    assert_eq!(page.chart_count(), 8);
    // every chart went through the normalizer before assembly
    for chart in page.charts() {
        assert!(!chart.layout.title.text.is_empty());
        assert_eq!(chart.layout.title.x, 0.5);
        assert_eq!(chart.layout.plot_background, "white");
        assert!(chart.layout.margin.is_some());
    }
}

#[test]
fn economy_gdp_chart_has_renamed_year_traces() {
    let page = Route::Economy.page(&data_dir());
    let gdp = page.charts().next().expect("gdp chart");
    let names: Vec<&str> = gdp
        .traces()
        .iter()
        .filter_map(|t| t.name.as_deref())
        .collect();
    assert_eq!(names, ["2019", "2020", "2021"]);
}

#[test]
fn society_page_groups_charts_under_wave_subheadings() {
    let page = Route::Society.page(&data_dir());
    assert_eq!(page.chart_count(), 15);
    let subheadings = page
        .blocks
        .iter()
        .filter(|block| matches!(block, Block::Subheading(_)))
        .count();
    assert_eq!(subheadings, 4);
}

#[test]
fn timeline_page_builds_all_four_charts() {
    let page = Route::Timeline.page(&data_dir());
    assert_eq!(page.chart_count(), 4);
}

#[test]
fn overview_page_is_text_only() {
    let page = Route::Overview.page(&data_dir());
    assert_eq!(page.chart_count(), 0);
    assert!(
        page.blocks
            .iter()
            .any(|block| matches!(block, Block::Link { .. }))
    );
}

#[test]
fn failed_dataset_load_keeps_static_text() {
    let page = Route::Society.page(Path::new("/no/such/dir"));
    assert_eq!(page.chart_count(), 0);
    assert!(
        page.blocks
            .iter()
            .any(|block| matches!(block, Block::Markdown(_)))
    );
}

#[test]
fn pages_serialize_to_json_and_back() {
    let page = Route::Timeline.page(&data_dir());
    let json = page.to_json_pretty().expect("serialize");
    let parsed = Page::from_json_str(&json).expect("parse");
    assert_eq!(parsed, page);
}
