//! Main ingestion API
//!
//! The Ingestor runs the batch pipeline for one log file:
//! parse → normalize → write.

use crate::config::IngestConfig;
use crate::types::{LogInfo, Result};
use crate::writer::WriteSummary;
use std::path::Path;

/// Entry point for converting HMD logs into standardized tables
#[derive(Debug, Clone, Default)]
pub struct Ingestor {
    config: IngestConfig,
}

impl Ingestor {
    /// Create a new ingestor with the given configuration
    pub fn new(config: IngestConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    pub fn config(&self) -> &IngestConfig {
        &self.config
    }

    /// Parse a log file into sessions, dispatching on its extension
    ///
    /// # Example
    /// ```no_run
    /// use hmd_log_ingest::{IngestConfig, Ingestor};
    /// use std::path::Path;
    ///
    /// let ingestor = Ingestor::new(IngestConfig::new());
    /// let logs = ingestor.parse_file(Path::new("logs/1.json")).unwrap();
    /// println!("{} sessions", logs.len());
    /// ```
    pub fn parse_file(&self, path: &Path) -> Result<Vec<LogInfo>> {
        crate::formats::parse_log_file(path)
    }

    /// Normalize angles of all sessions in place
    pub fn normalize(&self, logs: Vec<LogInfo>) -> Vec<LogInfo> {
        crate::normalize::normalize_logs(logs)
    }

    /// Write normalized sessions from `log_file_path` to their standardized table
    pub fn write_table(&self, logs: &[LogInfo], log_file_path: &Path) -> Result<WriteSummary> {
        crate::writer::save_parsed_logs(logs, log_file_path, &self.config)
    }

    /// Run the full pipeline for one log file
    ///
    /// # Example
    /// ```no_run
    /// use hmd_log_ingest::{IngestConfig, Ingestor};
    /// use std::path::Path;
    ///
    /// let ingestor = Ingestor::new(IngestConfig::new());
    /// let summary = ingestor.ingest_file(Path::new("logs/1.json")).unwrap();
    /// println!("{}", summary);
    /// ```
    pub fn ingest_file(&self, log_file_path: &Path) -> Result<WriteSummary> {
        log::debug!("Parsing log file: {:?}", log_file_path);
        let logs = self.parse_file(log_file_path)?;

        log::debug!("Normalizing log angles");
        let logs = self.normalize(logs);

        let summary = self.write_table(&logs, log_file_path)?;
        log::debug!("Saved parsed logs");

        Ok(summary)
    }
}
