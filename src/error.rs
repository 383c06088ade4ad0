// src/error.rs

use arrow::error::ArrowError;
use parquet::errors::ParquetError;

use crate::frame::ColumnType;

/// The page did not have the layout we expected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructureError {
    /// Fewer tables on the page than the positional index needs.
    #[error("expected table not found: wanted table #{index} but the document has {found} tables")]
    TooFewTables { found: usize, index: usize },

    /// A caption/header selector matched none of the tables.
    #[error("expected table not found: no table matches {selector}")]
    NoMatchingTable { selector: String },

    /// The target table has no `<tr>` at all.
    #[error("target table has no rows")]
    EmptyTable,

    /// The target table's first row carries no `<th>` cells.
    #[error("target table has no header cells in its first row")]
    MissingHeader,
}

/// A data row whose width differs from the header's.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("row {row} has {found} cells but the header has {expected} columns")]
pub struct ShapeError {
    pub row: usize,
    pub expected: usize,
    pub found: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error(transparent)]
    Structure(#[from] StructureError),

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error("column {column:?} row {row}: cannot parse {value:?} as {ty}")]
    Coerce {
        column: String,
        row: usize,
        value: String,
        ty: ColumnType,
    },

    #[error("no column named {0:?}")]
    UnknownColumn(String),

    #[error("arrow: {0}")]
    Arrow(#[from] ArrowError),

    #[error("parquet: {0}")]
    Parquet(#[from] ParquetError),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ExtractionError>;
