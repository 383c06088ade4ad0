// src/frame/mod.rs

pub mod coerce;

pub use coerce::{coerce_columns, ColumnType};

use arrow::{
    array::{ArrayRef, StringArray},
    datatypes::{DataType, Field, Schema},
    record_batch::{RecordBatch, RecordBatchOptions},
};
use std::sync::Arc;

use crate::error::{Result, ShapeError};
use crate::extract::Dataset;

/// Bind the dataset's rows to its named columns as an all-Utf8 batch.
///
/// This is where ragged rows are caught: the first row whose width differs
/// from the header fails with [`ShapeError`].
pub fn to_record_batch(dataset: &Dataset) -> Result<RecordBatch> {
    let width = dataset.num_columns();
    if let Some((row, cells)) = dataset
        .rows()
        .iter()
        .enumerate()
        .find(|(_, cells)| cells.len() != width)
    {
        return Err(ShapeError {
            row,
            expected: width,
            found: cells.len(),
        }
        .into());
    }

    let fields: Vec<Field> = dataset
        .columns()
        .iter()
        .map(|name| Field::new(name, DataType::Utf8, true))
        .collect();
    let schema = Arc::new(Schema::new(fields));

    let cols: Vec<ArrayRef> = (0..width)
        .map(|i| {
            let arr: StringArray = dataset
                .rows()
                .iter()
                .map(|row| Some(row[i].as_str()))
                .collect();
            Arc::new(arr) as ArrayRef
        })
        .collect();

    let opts = RecordBatchOptions::new().with_row_count(Some(dataset.num_rows()));
    RecordBatch::try_new_with_options(schema, cols, &opts).map_err(Into::into)
}
