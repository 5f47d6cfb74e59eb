use std::path::PathBuf;

use thiserror::Error;

pub type DashResult<T> = Result<T, DashError>;

#[derive(Debug, Error)]
pub enum DashError {
    #[error("failed to read dataset `{}`: {source}", path.display())]
    DatasetRead { path: PathBuf, source: csv::Error },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

/// Cell-level coercion failure raised while reshaping a table.
///
/// Value-level variants recover per row (the offending row is dropped);
/// `MissingColumn` is fatal for the dataset being loaded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("column `{column}` is missing")]
    MissingColumn { column: String },

    #[error("cell `{value}` in column `{column}` is not numeric")]
    NotNumeric { column: String, value: String },

    #[error("cell `{value}` in column `{column}` does not match date format `{format}`")]
    BadDate {
        column: String,
        value: String,
        format: String,
    },
}

impl ParseError {
    pub(crate) fn missing_column(column: &str) -> Self {
        Self::MissingColumn {
            column: column.to_owned(),
        }
    }
}
