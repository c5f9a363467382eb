//! Ingestion configuration types
//!
//! The output layout is fixed by convention (`data/standardized`); this config
//! only lets callers relocate the output root and pick the Parquet codec.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default directory for standardized tables, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "data/standardized";

/// Configuration for the ingestion pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Directory that receives `user<U>_clip<C>.parquet` files
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Compression codec for Parquet column chunks
    #[serde(default)]
    pub compression: TableCompression,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            compression: TableCompression::default(),
        }
    }
}

/// Parquet compression codec
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableCompression {
    #[default]
    Snappy,
    Zstd,
    None,
}

impl IngestConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the output directory
    pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.output_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Builder method: set the Parquet compression codec
    pub fn with_compression(mut self, compression: TableCompression) -> Self {
        self.compression = compression;
        self
    }
}
