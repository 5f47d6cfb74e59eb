use covid_dash_rs::chart::{Margin, normalize_with_margin};
use covid_dash_rs::{Cell, Chart, Table, Theme, normalize};
use proptest::prelude::*;

fn chart_from(rows: &[(String, f64)]) -> Chart {
    let mut table = Table::new(["x", "y"]);
    for (x, y) in rows {
        table
            .push_row(vec![Cell::text(x.clone()), Cell::Number(*y)])
            .expect("arity");
    }
    covid_dash_rs::chart::BarChart::new(&table, "x", "y")
        .build()
        .expect("build")
}

proptest! {
    #[test]
    fn normalize_sets_the_last_title_and_never_touches_data(
        rows in proptest::collection::vec(("[a-z]{1,6}", -100.0f64..100.0), 1..30),
        titles in proptest::collection::vec("[a-zA-Z ]{1,24}", 1..4),
    ) {
        let mut chart = chart_from(&rows);
        let data_before: Vec<(Vec<Cell>, Vec<Cell>)> = chart
            .traces()
            .iter()
            .map(|t| (t.x.clone(), t.y.clone()))
            .collect();

        for title in &titles {
            normalize(&mut chart, title, &Theme::default());
        }

        prop_assert_eq!(&chart.layout.title.text, titles.last().expect("title"));
        let data_after: Vec<(Vec<Cell>, Vec<Cell>)> = chart
            .traces()
            .iter()
            .map(|t| (t.x.clone(), t.y.clone()))
            .collect();
        prop_assert_eq!(data_before, data_after);
    }

    #[test]
    fn normalize_applies_any_margin_verbatim(
        left in 0u32..400,
        right in 0u32..400,
        top in 0u32..400,
        bottom in 0u32..400,
    ) {
        let mut chart = chart_from(&[("a".to_owned(), 1.0)]);
        let margin = Margin::new(left, right, top, bottom);
        normalize_with_margin(&mut chart, "t", &Theme::default(), margin);
        prop_assert_eq!(chart.layout.margin, Some(margin));
    }
}
