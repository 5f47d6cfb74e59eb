use covid_dash_rs::core::{LabelLookup, Unpivot, coerce_numeric, relabel};
use covid_dash_rs::{Cell, Table};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn wide_table(rows: usize, periods: usize) -> Table {
    let mut table = Table::new(
        std::iter::once("id".to_owned()).chain((0..periods).map(|i| format!("2020-{i:02}"))),
    );
    for row in 0..rows {
        let mut cells = vec![Cell::text(format!("series-{row}"))];
        cells.extend((0..periods).map(|p| Cell::Number((row * p) as f64)));
        table.push_row(cells).expect("valid generated row");
    }
    table
}

fn bench_unpivot_100x50(c: &mut Criterion) {
    let table = wide_table(100, 50);
    let unpivot = Unpivot::new("id").with_columns("id", "date", "value");

    c.bench_function("unpivot_100x50", |b| {
        b.iter(|| unpivot.apply(black_box(&table)).expect("unpivot"))
    });
}

fn bench_relabel_5k_rows(c: &mut Criterion) {
    let mut table = Table::new(["category", "value"]);
    for row in 0..5_000 {
        table
            .push_row(vec![
                Cell::text(format!("code-{}", row % 12)),
                Cell::Number(row as f64),
            ])
            .expect("valid generated row");
    }
    let lookup: LabelLookup = (0..12)
        .map(|i| (format!("code-{i}"), format!("Κατηγορία {i}")))
        .collect();

    c.bench_function("relabel_5k_rows", |b| {
        b.iter(|| relabel(black_box(&table), black_box(&lookup)))
    });
}

fn bench_coerce_numeric_5k_rows(c: &mut Criterion) {
    let mut table = Table::new(["value"]);
    for row in 0..5_000 {
        let cell = if row % 50 == 0 {
            Cell::text("NA")
        } else {
            Cell::text(format!("{}.5", row))
        };
        table.push_row(vec![cell]).expect("valid generated row");
    }

    c.bench_function("coerce_numeric_5k_rows", |b| {
        b.iter(|| coerce_numeric(black_box(&table), "value", &["NA"]).expect("coerce"))
    });
}

criterion_group!(
    benches,
    bench_unpivot_100x50,
    bench_relabel_5k_rows,
    bench_coerce_numeric_5k_rows
);
criterion_main!(benches);
