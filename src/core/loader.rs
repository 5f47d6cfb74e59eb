//! CSV dataset loading.
//!
//! Files are read-only inputs; every page render re-reads its datasets from
//! scratch. Column typing mirrors how the source exports behave: a column is
//! numeric only when every non-empty cell parses as a number, otherwise it
//! stays text and the reshaping operations decide per row. Dates are never
//! inferred here; pages coerce date columns explicitly.

use std::path::Path;

use crate::core::table::{Cell, Table};
use crate::error::{DashError, DashResult};

/// Reads a CSV file into a [`Table`].
///
/// The first record is the header row. Missing or unreadable files are fatal
/// for the page being constructed.
pub fn load_csv(path: impl AsRef<Path>) -> DashResult<Table> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path).map_err(|source| DashError::DatasetRead {
        path: path.to_owned(),
        source,
    })?;

    let headers = reader
        .headers()
        .map_err(|source| DashError::DatasetRead {
            path: path.to_owned(),
            source,
        })?
        .clone();

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| DashError::DatasetRead {
            path: path.to_owned(),
            source,
        })?;
        raw_rows.push(record.iter().map(str::to_owned).collect());
    }

    let numeric = infer_numeric_columns(headers.len(), &raw_rows);

    let mut table = Table::new(headers.iter());
    for raw in raw_rows {
        let cells = raw
            .into_iter()
            .enumerate()
            .map(|(index, value)| typed_cell(value, numeric[index]))
            .collect();
        table.push_row(cells)?;
    }

    tracing::debug!(
        path = %path.display(),
        rows = table.row_count(),
        columns = table.column_count(),
        "loaded dataset"
    );
    Ok(table)
}

/// A column is numeric when it has at least one non-empty cell and all of
/// its non-empty cells parse as `f64`.
fn infer_numeric_columns(column_count: usize, rows: &[Vec<String>]) -> Vec<bool> {
    (0..column_count)
        .map(|index| {
            let mut seen_value = false;
            for row in rows {
                let value = row[index].trim();
                if value.is_empty() {
                    continue;
                }
                seen_value = true;
                if value.parse::<f64>().is_err() {
                    return false;
                }
            }
            seen_value
        })
        .collect()
}

fn typed_cell(value: String, numeric: bool) -> Cell {
    if numeric {
        if let Ok(number) = value.trim().parse::<f64>() {
            return Cell::Number(number);
        }
    }
    Cell::Text(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_inference_requires_every_cell_to_parse() {
        let rows = vec![
            vec!["a".to_owned(), "1.5".to_owned(), "x".to_owned()],
            vec!["b".to_owned(), "2".to_owned(), "3".to_owned()],
        ];
        assert_eq!(infer_numeric_columns(3, &rows), vec![false, true, false]);
    }

    #[test]
    fn empty_cells_do_not_block_numeric_inference() {
        let rows = vec![
            vec!["".to_owned(), "1".to_owned()],
            vec!["2".to_owned(), "".to_owned()],
        ];
        assert_eq!(infer_numeric_columns(2, &rows), vec![true, true]);
    }

    #[test]
    fn all_empty_column_stays_text() {
        let rows = vec![vec!["".to_owned()], vec!["".to_owned()]];
        assert_eq!(infer_numeric_columns(1, &rows), vec![false]);
    }
}
