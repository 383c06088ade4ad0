// src/output.rs

use arrow::{json::ArrayWriter, record_batch::RecordBatch};
use parquet::{arrow::ArrowWriter, basic::Compression, file::properties::WriterProperties};
use serde::Deserialize;
use std::{
    fs::{self, File},
    io::Write,
    path::Path,
};
use tracing::info;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Parquet,
    Json,
}

impl OutputFormat {
    /// Guess from a file extension, `None` if it is neither `.parquet` nor `.json`.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "parquet" | "pq" => Some(OutputFormat::Parquet),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

pub fn write_parquet(batch: &RecordBatch, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let props = WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build();
    let mut writer = ArrowWriter::try_new(file, batch.schema(), Some(props))?;
    writer.write(batch)?;
    writer.close()?;
    Ok(())
}

/// One JSON object per row, keys in column order. Null cells are left out.
pub fn write_json<W: Write>(batch: &RecordBatch, writer: W) -> Result<()> {
    let mut json = ArrayWriter::new(writer);
    json.write(batch)?;
    json.finish()?;
    Ok(())
}

pub fn write_output(format: OutputFormat, batch: &RecordBatch, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    match format {
        OutputFormat::Parquet => write_parquet(batch, path)?,
        OutputFormat::Json => write_json(batch, File::create(path)?)?,
    }
    info!(path = %path.display(), rows = batch.num_rows(), ?format, "wrote dataset");
    Ok(())
}
