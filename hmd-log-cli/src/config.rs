//! Configuration loading and parsing

use anyhow::{Context, Result};
use hmd_log_ingest::IngestConfig;
use std::fs;
use std::path::Path;

/// Load ingestion configuration from a TOML file
///
/// Every key is optional:
///
/// ```toml
/// output_dir = "data/standardized"
/// compression = "snappy"   # snappy | zstd | none
/// ```
pub fn load_config(path: &Path) -> Result<IngestConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: IngestConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    Ok(config)
}
