// src/frame/coerce.rs

use arrow::{
    array::{Array, ArrayRef, Float64Builder, Int64Builder, StringArray},
    datatypes::{DataType, Field, Schema},
    record_batch::{RecordBatch, RecordBatchOptions},
};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt, str::FromStr, sync::Arc};

use crate::error::{ExtractionError, Result};

/// Declared type for a column; nothing is inferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColumnType {
    #[default]
    #[serde(rename = "utf8", alias = "string")]
    Utf8,
    #[serde(rename = "int", alias = "int64")]
    Int64,
    #[serde(rename = "float", alias = "float64")]
    Float64,
}

impl ColumnType {
    fn data_type(self) -> DataType {
        match self {
            ColumnType::Utf8 => DataType::Utf8,
            ColumnType::Int64 => DataType::Int64,
            ColumnType::Float64 => DataType::Float64,
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ColumnType::Utf8 => "utf8",
            ColumnType::Int64 => "int",
            ColumnType::Float64 => "float",
        })
    }
}

/// Convert the declared string columns of `batch` into their typed form.
///
/// Empty cells become null. A cell that does not parse is an error rather
/// than a silent null.
pub fn coerce_columns(
    batch: &RecordBatch,
    types: &BTreeMap<String, ColumnType>,
) -> Result<RecordBatch> {
    let schema = batch.schema();
    for name in types.keys() {
        if schema.fields().iter().all(|f| f.name() != name) {
            return Err(ExtractionError::UnknownColumn(name.clone()));
        }
    }

    let mut fields = Vec::with_capacity(batch.num_columns());
    let mut cols = Vec::with_capacity(batch.num_columns());

    for (arr, fld) in batch.columns().iter().zip(schema.fields()) {
        let ty = types.get(fld.name()).copied().unwrap_or_default();
        let typed: Option<ArrayRef> = match (ty, arr.as_any().downcast_ref::<StringArray>()) {
            (ColumnType::Int64, Some(sarr)) => {
                let mut b = Int64Builder::with_capacity(sarr.len());
                for (row, cell) in sarr.iter().enumerate() {
                    b.append_option(parse_cell::<i64>(fld.name(), row, cell, ty)?);
                }
                Some(Arc::new(b.finish()))
            }
            (ColumnType::Float64, Some(sarr)) => {
                let mut b = Float64Builder::with_capacity(sarr.len());
                for (row, cell) in sarr.iter().enumerate() {
                    b.append_option(parse_cell::<f64>(fld.name(), row, cell, ty)?);
                }
                Some(Arc::new(b.finish()))
            }
            _ => None,
        };

        match typed {
            Some(col) => {
                fields.push(Field::new(fld.name(), ty.data_type(), true));
                cols.push(col);
            }
            None => {
                fields.push(fld.as_ref().clone());
                cols.push(arr.clone());
            }
        }
    }

    let opts = RecordBatchOptions::new().with_row_count(Some(batch.num_rows()));
    RecordBatch::try_new_with_options(Arc::new(Schema::new(fields)), cols, &opts)
        .map_err(Into::into)
}

fn parse_cell<T: FromStr>(
    column: &str,
    row: usize,
    cell: Option<&str>,
    ty: ColumnType,
) -> Result<Option<T>> {
    let Some(raw) = cell.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    raw.parse().map(Some).map_err(|_| ExtractionError::Coerce {
        column: column.to_string(),
        row,
        value: raw.to_string(),
        ty,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{extract::Dataset, frame::to_record_batch};
    use arrow::array::{Array, Float64Array, Int64Array};

    fn standings() -> RecordBatch {
        let ds = Dataset::new(
            vec!["Team".into(), "Pts".into(), "Avg".into()],
            vec![
                vec!["Ajax".into(), "10".into(), "2.5".into()],
                vec!["PSV".into(), "".into(), "1.75".into()],
            ],
        );
        to_record_batch(&ds).unwrap()
    }

    #[test]
    fn declared_columns_are_typed() {
        let types = BTreeMap::from([
            ("Pts".to_string(), ColumnType::Int64),
            ("Avg".to_string(), ColumnType::Float64),
        ]);
        let out = coerce_columns(&standings(), &types).unwrap();

        assert_eq!(out.schema().field(0).data_type(), &DataType::Utf8);
        let pts = out.column(1).as_any().downcast_ref::<Int64Array>().unwrap();
        assert_eq!(pts.value(0), 10);
        assert!(pts.is_null(1));
        let avg = out.column(2).as_any().downcast_ref::<Float64Array>().unwrap();
        assert_eq!(avg.value(1), 1.75);
    }

    #[test]
    fn unparseable_cell_names_column_and_row() {
        let types = BTreeMap::from([("Team".to_string(), ColumnType::Int64)]);
        match coerce_columns(&standings(), &types) {
            Err(ExtractionError::Coerce { column, row, value, .. }) => {
                assert_eq!((column.as_str(), row, value.as_str()), ("Team", 0, "Ajax"));
            }
            other => panic!("expected coerce error, got {other:?}"),
        }
    }

    #[test]
    fn unknown_column_is_rejected() {
        let types = BTreeMap::from([("GD".to_string(), ColumnType::Int64)]);
        assert!(matches!(
            coerce_columns(&standings(), &types),
            Err(ExtractionError::UnknownColumn(c)) if c == "GD"
        ));
    }

    #[test]
    fn column_type_names_in_yaml() {
        let types: BTreeMap<String, ColumnType> =
            serde_yaml::from_str("Pts: int\nAvg: float64\nTeam: utf8\n").unwrap();
        assert_eq!(types["Pts"], ColumnType::Int64);
        assert_eq!(types["Avg"], ColumnType::Float64);
        assert_eq!(types["Team"], ColumnType::Utf8);
    }
}
