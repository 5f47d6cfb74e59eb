use chrono::NaiveDate;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::error::{DashError, DashResult, ParseError};

/// One scalar value inside a [`Table`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    Text(String),
    Number(f64),
    Date(NaiveDate),
}

impl Cell {
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(value) => Some(*value),
            _ => None,
        }
    }

    /// True for empty text cells, the tabular notion of "no observation".
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Text(value) if value.trim().is_empty())
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Number(value) => write!(f, "{value}"),
            Self::Date(value) => write!(f, "{}", value.format("%Y-%m-%d")),
        }
    }
}

/// In-memory tabular data: ordered named columns over rows of [`Cell`]s.
///
/// Loaded once per page render and treated as immutable afterwards; the
/// reshaping operations return new tables instead of mutating in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: IndexSet<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(String::as_str)
    }

    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.get_index_of(name)
    }

    /// Resolves a column name, failing the dataset load when absent.
    pub fn require_column(&self, name: &str) -> Result<usize, ParseError> {
        self.column_index(name)
            .ok_or_else(|| ParseError::missing_column(name))
    }

    /// Appends a row; the cell count must match the column count.
    pub fn push_row(&mut self, cells: Vec<Cell>) -> DashResult<()> {
        if cells.len() != self.columns.len() {
            return Err(DashError::InvalidData(format!(
                "row has {} cells, table has {} columns",
                cells.len(),
                self.columns.len()
            )));
        }
        self.rows.push(cells);
        Ok(())
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    #[must_use]
    pub fn cell(&self, row: usize, column: &str) -> Option<&Cell> {
        let index = self.column_index(column)?;
        self.rows.get(row)?.get(index)
    }

    /// All values of one column, in row order.
    pub fn column(&self, name: &str) -> Result<Vec<&Cell>, ParseError> {
        let index = self.require_column(name)?;
        Ok(self.rows.iter().map(|row| &row[index]).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_row_rejects_wrong_arity() {
        let mut table = Table::new(["a", "b"]);
        let result = table.push_row(vec![Cell::Number(1.0)]);
        assert!(result.is_err());
        assert!(table.is_empty());
    }

    #[test]
    fn require_column_reports_missing_name() {
        let table = Table::new(["a"]);
        let err = table.require_column("b").unwrap_err();
        assert_eq!(
            err,
            ParseError::MissingColumn {
                column: "b".to_owned()
            }
        );
    }

    #[test]
    fn cell_display_is_stable() {
        assert_eq!(Cell::text("x").to_string(), "x");
        assert_eq!(Cell::Number(2.5).to_string(), "2.5");
        let date = NaiveDate::from_ymd_opt(2021, 3, 1).expect("valid date");
        assert_eq!(Cell::Date(date).to_string(), "2021-03-01");
    }
}
