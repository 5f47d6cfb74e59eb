use covid_dash_rs::core::{LabelLookup, Unpivot, coerce_numeric, relabel};
use covid_dash_rs::{Cell, Table};
use proptest::prelude::*;

fn text_table(columns: usize, cells: Vec<Vec<String>>) -> Table {
    let mut table = Table::new((0..columns).map(|i| format!("c{i}")));
    for row in cells {
        let cells = row.into_iter().map(Cell::Text).collect();
        table.push_row(cells).expect("arity");
    }
    table
}

proptest! {
    #[test]
    fn relabel_is_idempotent_for_disjoint_lookups(
        rows in proptest::collection::vec(
            proptest::collection::vec("[a-k][a-z]{0,6}", 3),
            1..20,
        ),
        mapped in proptest::collection::vec("[a-k][a-z]{0,6}", 1..8),
    ) {
        // Display forms use a disjoint alphabet so they can never be keys.
        let lookup: LabelLookup = mapped
            .iter()
            .enumerate()
            .map(|(i, key)| (key.clone(), format!("Λ{i}")))
            .collect();

        let table = text_table(3, rows);
        let once = relabel(&table, &lookup);
        let twice = relabel(&once, &lookup);
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(once.row_count(), table.row_count());
    }

    #[test]
    fn unpivot_produces_identifiers_times_periods_rows(
        identifiers in 1usize..12,
        periods in 1usize..10,
        excluded in 0usize..4,
    ) {
        prop_assume!(excluded < periods);

        let columns = 1 + periods;
        let mut table = Table::new(
            std::iter::once("id".to_owned())
                .chain((0..periods).map(|i| format!("p{i}"))),
        );
        for row in 0..identifiers {
            let mut cells = vec![Cell::text(format!("row{row}"))];
            cells.extend((0..periods).map(|p| Cell::Number((row * p) as f64)));
            table.push_row(cells).expect("arity");
        }
        prop_assert_eq!(table.column_count(), columns);

        let narrow = Unpivot::new("id")
            .exclude((0..excluded).map(|i| format!("p{i}")))
            .apply(&table)
            .expect("unpivot");
        prop_assert_eq!(narrow.row_count(), identifiers * (periods - excluded));
    }

    #[test]
    fn coerce_numeric_keeps_only_parseable_rows_in_order(
        values in proptest::collection::vec(
            prop_oneof![
                (-1_000.0f64..1_000.0).prop_map(|n| format!("{n:.3}")),
                Just("NA".to_owned()),
                Just("x".to_owned()),
            ],
            0..40,
        ),
    ) {
        let table = text_table(1, values.iter().map(|v| vec![v.clone()]).collect());
        let coerced = coerce_numeric(&table, "c0", &["NA"]).expect("coerce");

        let expected: Vec<f64> = values
            .iter()
            .filter_map(|v| {
                if v.as_str() == "NA" || v.as_str() == "x" {
                    None
                } else {
                    v.parse().ok()
                }
            })
            .collect();
        let actual: Vec<f64> = coerced
            .column("c0")
            .expect("column")
            .iter()
            .filter_map(|cell| cell.as_number())
            .collect();
        prop_assert_eq!(actual, expected);
    }
}
