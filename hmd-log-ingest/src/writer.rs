//! Parquet table writer
//!
//! Flattens sessions into one typed row per frame and writes them as a single
//! Arrow record batch. Column names and order are relied on downstream and must
//! not change.

use crate::config::{IngestConfig, TableCompression};
use crate::types::{IngestError, LogInfo, LogType, Result};
use arrow::array::{ArrayRef, Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::{Compression, ZstdLevel};
use parquet::file::properties::WriterProperties;
use std::fmt;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// One output row: a frame together with its session's metadata
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// Played back video file of the session
    pub filename: String,
    /// HMD used for the session
    pub hmd: String,
    /// Pitch in radians, within [-π/2, π/2]
    pub pitch: f64,
    /// Roll in radians
    pub roll: f64,
    /// Playback time in seconds
    pub sec: f64,
    /// Yaw in radians, within (-π, π]
    pub yaw: f64,
    /// Parser that produced the session
    pub log_type: LogType,
    /// File-level classification tag
    pub label: Option<String>,
    /// Declared duration of the video
    pub video_length_s: Option<f64>,
}

/// Result of writing one table
#[derive(Debug, Clone, PartialEq)]
pub struct WriteSummary {
    /// Location of the written Parquet file
    pub output_path: PathBuf,
    /// Number of sessions flattened into the table
    pub sessions: usize,
    /// Number of rows (frames) written
    pub rows: usize,
}

impl fmt::Display for WriteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} rows from {} sessions -> {}",
            self.rows,
            self.sessions,
            self.output_path.display()
        )
    }
}

/// Arrow schema of the standardized table
pub fn table_schema() -> SchemaRef {
    Arc::new(Schema::new(vec![
        Field::new("filename", DataType::Utf8, false),
        Field::new("hmd", DataType::Utf8, false),
        Field::new("pitch", DataType::Float64, false),
        Field::new("roll", DataType::Float64, false),
        Field::new("sec", DataType::Float64, false),
        Field::new("yaw", DataType::Float64, false),
        Field::new("log_type", DataType::Utf8, false),
        Field::new("label", DataType::Utf8, true),
        Field::new("video_length_s", DataType::Float64, true),
    ]))
}

/// Build `<output_dir>/user<U>_clip<C>.parquet`
///
/// `U` is the stem of the log file path and `C` the stem of the first
/// session's `filename`.
pub fn output_path(output_dir: &Path, log_file_path: &Path, logs: &[LogInfo]) -> Result<PathBuf> {
    let first = logs.first().ok_or(IngestError::EmptyInput)?;

    let user = file_stem(log_file_path);
    let clip = file_stem(Path::new(&first.filename));

    Ok(output_dir.join(format!("user{}_clip{}.parquet", user, clip)))
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Flatten sessions into rows, session order outer and frame order inner
pub fn flatten_rows(logs: &[LogInfo]) -> Vec<TableRow> {
    logs.iter()
        .flat_map(|log| {
            log.data.iter().map(move |frame| TableRow {
                filename: log.filename.clone(),
                hmd: log.hmd.clone(),
                pitch: frame.pitch,
                roll: frame.roll,
                sec: frame.sec,
                yaw: frame.yaw,
                log_type: log.log_type,
                label: log.label.clone(),
                video_length_s: log.video_length_s,
            })
        })
        .collect()
}

/// Convert rows into a record batch matching [`table_schema`]
pub fn rows_to_batch(rows: &[TableRow]) -> Result<RecordBatch> {
    let columns: Vec<ArrayRef> = vec![
        Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.filename.as_str()))),
        Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.hmd.as_str()))),
        Arc::new(Float64Array::from_iter_values(rows.iter().map(|r| r.pitch))),
        Arc::new(Float64Array::from_iter_values(rows.iter().map(|r| r.roll))),
        Arc::new(Float64Array::from_iter_values(rows.iter().map(|r| r.sec))),
        Arc::new(Float64Array::from_iter_values(rows.iter().map(|r| r.yaw))),
        Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.log_type.as_str()))),
        Arc::new(rows.iter().map(|r| r.label.as_deref()).collect::<StringArray>()),
        Arc::new(rows.iter().map(|r| r.video_length_s).collect::<Float64Array>()),
    ];

    RecordBatch::try_new(table_schema(), columns)
        .map_err(|e| IngestError::TableWriteError(format!("Failed to build record batch: {}", e)))
}

/// Write normalized sessions from one log file to their standardized table
pub fn save_parsed_logs(
    logs: &[LogInfo],
    log_file_path: &Path,
    config: &IngestConfig,
) -> Result<WriteSummary> {
    let path = output_path(&config.output_dir, log_file_path, logs)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let rows = flatten_rows(logs);
    let batch = rows_to_batch(&rows)?;
    write_batch(&path, &batch, config.compression)?;

    log::info!("Wrote {} rows to {:?}", rows.len(), path);

    Ok(WriteSummary {
        output_path: path,
        sessions: logs.len(),
        rows: rows.len(),
    })
}

fn write_batch(path: &Path, batch: &RecordBatch, compression: TableCompression) -> Result<()> {
    let codec = match compression {
        TableCompression::Snappy => Compression::SNAPPY,
        TableCompression::Zstd => Compression::ZSTD(ZstdLevel::default()),
        TableCompression::None => Compression::UNCOMPRESSED,
    };
    let props = WriterProperties::builder().set_compression(codec).build();

    let file = File::create(path)?;
    let mut writer = ArrowWriter::try_new(file, batch.schema(), Some(props)).map_err(|e| {
        IngestError::TableWriteError(format!("Failed to create Parquet writer {:?}: {}", path, e))
    })?;

    writer
        .write(batch)
        .map_err(|e| IngestError::TableWriteError(format!("Failed to write {:?}: {}", path, e)))?;
    writer
        .close()
        .map_err(|e| IngestError::TableWriteError(format!("Failed to finalize {:?}: {}", path, e)))?;

    Ok(())
}
