//! Log file format parsers (JSON, CSV)
//!
//! The format is resolved once from the file extension and dispatched to a
//! format-specific parser. Each parser turns one file into the sessions it holds.

use crate::types::{IngestError, LogInfo, LogType, Result};
use std::path::Path;

pub mod csv;
pub mod json;

// Re-export parser types
pub use self::csv::CsvLogParser;
pub use self::json::{parse_json_str, JsonLogParser};

/// Common trait for all log file parsers
pub trait LogFormatParser {
    /// Tag stamped on every session this parser produces
    const LOG_TYPE: LogType;

    /// Parse a log file into its sessions
    fn parse(path: &Path) -> Result<Vec<LogInfo>>;
}

/// Log format resolved from a file extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Csv,
    /// No parser exists for this extension (lowercased, if any)
    Unsupported(Option<String>),
}

impl LogFormat {
    /// Resolve the format of a log file from its extension (case-insensitive)
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .map(|s| s.to_lowercase());

        match extension.as_deref() {
            Some("json") => LogFormat::Json,
            Some("csv") => LogFormat::Csv,
            _ => LogFormat::Unsupported(extension),
        }
    }
}

/// Parse a log file, dispatching on its extension
pub fn parse_log_file(path: &Path) -> Result<Vec<LogInfo>> {
    match LogFormat::from_path(path) {
        LogFormat::Json => {
            log::debug!("Detected JSON log format");
            JsonLogParser::parse(path)
        }
        LogFormat::Csv => {
            log::debug!("Detected CSV log format");
            CsvLogParser::parse(path)
        }
        LogFormat::Unsupported(extension) => Err(IngestError::UnrecognizedExtension(extension)),
    }
}
