//! Reshaping of raw tables into the narrow form chart builders expect.
//!
//! Cell-level failures recover per row: the offending row is dropped and the
//! drop is logged. A missing identifier or target column is fatal for the
//! dataset being loaded.

use chrono::NaiveDate;

use crate::core::labels::LabelLookup;
use crate::core::table::{Cell, Table};
use crate::error::{DashError, DashResult, ParseError};

/// Wide-to-long unpivot of repeated observation columns.
///
/// Every column after the identifier column is treated as one observation
/// period; each `(identifier, period, value)` triple becomes one output row.
/// Metadata columns (row counters, country codes) are dropped via the
/// exclusion set, and multi-country tables can be narrowed to a single
/// identifier row with [`Unpivot::retain_id`].
#[derive(Debug, Clone)]
pub struct Unpivot {
    id_column: String,
    exclude: Vec<String>,
    retain_id: Option<String>,
    id_name: String,
    period_name: String,
    value_name: String,
}

impl Unpivot {
    #[must_use]
    pub fn new(id_column: impl Into<String>) -> Self {
        let id_column = id_column.into();
        Self {
            id_name: id_column.clone(),
            id_column,
            exclude: Vec::new(),
            retain_id: None,
            period_name: "period".to_owned(),
            value_name: "value".to_owned(),
        }
    }

    /// Period columns to drop entirely (e.g. `Unnamed: 0`, `country_code`).
    #[must_use]
    pub fn exclude<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Keeps only rows whose identifier cell equals `id`.
    #[must_use]
    pub fn retain_id(mut self, id: impl Into<String>) -> Self {
        self.retain_id = Some(id.into());
        self
    }

    /// Names of the three output columns.
    #[must_use]
    pub fn with_columns(
        mut self,
        id: impl Into<String>,
        period: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.id_name = id.into();
        self.period_name = period.into();
        self.value_name = value.into();
        self
    }

    pub fn apply(&self, table: &Table) -> DashResult<Table> {
        let id_index = table.require_column(&self.id_column)?;

        let period_columns: Vec<(usize, String)> = table
            .column_names()
            .enumerate()
            .filter(|(index, name)| {
                *index != id_index && !self.exclude.iter().any(|excluded| excluded == name)
            })
            .map(|(index, name)| (index, name.to_owned()))
            .collect();
        if period_columns.is_empty() {
            return Err(DashError::InvalidData(
                "table has no period columns to unpivot".to_owned(),
            ));
        }

        let mut narrow = Table::new([
            self.id_name.clone(),
            self.period_name.clone(),
            self.value_name.clone(),
        ]);
        for row in table.rows() {
            let id = &row[id_index];
            if let Some(retain) = &self.retain_id {
                if id.to_string() != *retain {
                    continue;
                }
            }
            for (index, period) in &period_columns {
                narrow.push_row(vec![
                    id.clone(),
                    Cell::text(period.clone()),
                    row[*index].clone(),
                ])?;
            }
        }
        Ok(narrow)
    }
}

/// Replaces every exact-match text cell with its display form.
///
/// Cells with no match pass through unchanged, so relabeling an already
/// relabeled table is a no-op.
#[must_use]
pub fn relabel(table: &Table, lookup: &LabelLookup) -> Table {
    let mut out = Table::new(table.column_names());
    for row in table.rows() {
        let cells = row
            .iter()
            .map(|cell| match cell {
                Cell::Text(value) => match lookup.get(value) {
                    Some(display) => Cell::text(display.clone()),
                    None => cell.clone(),
                },
                other => other.clone(),
            })
            .collect();
        // push_row cannot fail here: arity is preserved by construction.
        let _ = out.push_row(cells);
    }
    out
}

/// Parses a string column into numeric scalars.
///
/// Rows whose cell is one of the `missing` sentinels, or fails to parse, are
/// dropped rather than failing the whole reshape; row order is preserved.
pub fn coerce_numeric(table: &Table, column: &str, missing: &[&str]) -> DashResult<Table> {
    let index = table.require_column(column)?;

    let mut out = Table::new(table.column_names());
    let mut dropped = 0usize;
    for row in table.rows() {
        let parsed = match &row[index] {
            Cell::Number(value) => Some(*value),
            Cell::Text(value) => {
                let trimmed = value.trim();
                if missing.contains(&trimmed) {
                    None
                } else {
                    match trimmed.parse::<f64>() {
                        Ok(number) => Some(number),
                        Err(_) => {
                            tracing::warn!(
                                error = %ParseError::NotNumeric {
                                    column: column.to_owned(),
                                    value: value.clone(),
                                },
                                "dropping row"
                            );
                            None
                        }
                    }
                }
            }
            Cell::Date(_) => None,
        };

        match parsed {
            Some(number) => {
                let mut cells = row.clone();
                cells[index] = Cell::Number(number);
                out.push_row(cells)?;
            }
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        tracing::debug!(column, dropped, "coerce_numeric dropped rows");
    }
    Ok(out)
}

/// Day-first or month-first reading of slash-separated dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrder {
    DayFirst,
    MonthFirst,
}

impl DateOrder {
    #[must_use]
    pub fn pattern(self) -> &'static str {
        match self {
            Self::DayFirst => "%d/%m/%Y",
            Self::MonthFirst => "%m/%d/%Y",
        }
    }
}

/// Parses a slash-separated date column under the given convention.
pub fn coerce_date(table: &Table, column: &str, order: DateOrder) -> DashResult<Table> {
    coerce_date_format(table, column, order.pattern())
}

/// Parses a date column with an explicit chrono pattern.
///
/// The year-only pattern `%Y` resolves to January 1st and also accepts
/// columns the loader already inferred as numeric. Unparseable cells drop
/// their row; a missing column is fatal.
pub fn coerce_date_format(table: &Table, column: &str, format: &str) -> DashResult<Table> {
    let index = table.require_column(column)?;

    let mut out = Table::new(table.column_names());
    let mut dropped = 0usize;
    for row in table.rows() {
        let parsed = match &row[index] {
            Cell::Date(value) => Some(*value),
            Cell::Text(value) => parse_date(value.trim(), format),
            Cell::Number(value) if format == "%Y" => year_to_date(*value),
            Cell::Number(_) => None,
        };

        match parsed {
            Some(date) => {
                let mut cells = row.clone();
                cells[index] = Cell::Date(date);
                out.push_row(cells)?;
            }
            None => {
                tracing::warn!(
                    error = %ParseError::BadDate {
                        column: column.to_owned(),
                        value: row[index].to_string(),
                        format: format.to_owned(),
                    },
                    "dropping row"
                );
                dropped += 1;
            }
        }
    }

    if dropped > 0 {
        tracing::debug!(column, dropped, "coerce_date dropped rows");
    }
    Ok(out)
}

fn parse_date(value: &str, format: &str) -> Option<NaiveDate> {
    if format == "%Y" {
        return year_to_date(value.parse::<f64>().ok()?);
    }
    NaiveDate::parse_from_str(value, format).ok()
}

fn year_to_date(year: f64) -> Option<NaiveDate> {
    if year.fract() != 0.0 {
        return None;
    }
    NaiveDate::from_ymd_opt(year as i32, 1, 1)
}
