//! CSV log parser
//!
//! The CSV column layout for HMD logs has not been defined yet. The format is
//! recognized so callers can tell "known but unsupported" apart from an
//! unknown extension.

use super::LogFormatParser;
use crate::types::{IngestError, LogInfo, LogType, Result};
use std::path::Path;

/// CSV log parser (not yet supported)
pub struct CsvLogParser;

impl LogFormatParser for CsvLogParser {
    const LOG_TYPE: LogType = LogType::Csv;

    fn parse(path: &Path) -> Result<Vec<LogInfo>> {
        log::warn!("CSV log parsing requested for {:?}", path);
        Err(IngestError::UnsupportedFormat(
            "CSV log parsing not yet implemented".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_parse_is_unsupported() {
        let result = CsvLogParser::parse(Path::new("user1.csv"));
        match result {
            Err(IngestError::UnsupportedFormat(msg)) => {
                assert!(msg.contains("not yet implemented"));
            }
            other => panic!("expected UnsupportedFormat, got {:?}", other),
        }
    }
}
