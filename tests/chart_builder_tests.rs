use std::path::{Path, PathBuf};

use covid_dash_rs::chart::{BarChart, BarMode, TraceKind, palette};
use covid_dash_rs::core::{labels, load_csv, relabel};

fn dataset(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("datasets")
        .join(name)
}

#[test]
fn grouped_bars_split_by_year_with_text_labels() {
    let table = load_csv(dataset("gdp_2.csv")).expect("load");
    let chart = BarChart::new(&table, "quarter", "OBS_VALUE")
        .color_by("year")
        .grouped()
        .text("metavoli")
        .palette(palette::SET2)
        .build()
        .expect("build");

    assert_eq!(chart.trace_count(), 3);
    assert_eq!(chart.layout.bar_mode, BarMode::Group);
    for trace in chart.traces() {
        assert_eq!(trace.kind, TraceKind::Bar);
        let text = trace.text.as_ref().expect("text labels");
        assert_eq!(text.len(), trace.len());
    }
    // palette colors are assigned in first-appearance order
    assert_eq!(chart.traces()[0].color.as_deref(), Some(palette::SET2[0]));
    assert_eq!(chart.traces()[1].color.as_deref(), Some(palette::SET2[1]));
}

#[test]
fn faceted_survey_chart_gets_one_annotation_per_pane() {
    let table = load_csv(dataset("erwtisi_32.csv")).expect("load");
    let chart = BarChart::new(&table, "date", "timi")
        .color_by("apantisi")
        .facet("apantisi", 2)
        .build()
        .expect("build");

    let facets = chart.facets.as_ref().expect("facet grid");
    assert_eq!(facets.column, "apantisi");
    assert_eq!(facets.wrap, 2);
    assert_eq!(chart.layout.annotations.len(), 4);
    // annotation text is the facet value itself, no key prefix
    assert_eq!(chart.layout.annotations[0].text, "Εργάζομαι κανονικά");
}

#[test]
fn relabeled_categories_become_trace_names() {
    let table = load_csv(dataset("xae.csv")).expect("load");
    let table = relabel(&table, labels::lookup("fdi_sectors").expect("lookup"));
    let chart = BarChart::new(&table, "year", "value")
        .color_by("klados")
        .grouped()
        .build()
        .expect("build");

    let names: Vec<&str> = chart
        .traces()
        .iter()
        .filter_map(|t| t.name.as_deref())
        .collect();
    assert_eq!(
        names,
        [
            "Μεταποίηση",
            "Χρηματοπιστωτικές δραστηριότητες",
            "Διαχείριση ακίνητης περιουσίας",
            "Ιδιωτικές αγοραπωλησίες ακινήτων",
        ]
    );
}
