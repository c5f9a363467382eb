//! HMD Log Ingestion Library
//!
//! Converts head-mounted-display orientation logs recorded during 360° video
//! playback into standardized Parquet tables.
//!
//! # Architecture
//!
//! One log file is processed start to finish:
//! - Parse the file into sessions ([`LogInfo`]) based on its extension
//! - Normalize every frame's angles to radians (yaw wrapped, pitch clamped)
//! - Flatten sessions into rows and write `user<U>_clip<C>.parquet`
//!
//! The library does NOT:
//! - Process video or check frame timing against playback
//! - Interpolate missing frames
//! - Stream or incrementally append to tables
//!
//! # Example Usage
//!
//! ```no_run
//! use hmd_log_ingest::{IngestConfig, Ingestor};
//! use std::path::Path;
//!
//! let ingestor = Ingestor::new(IngestConfig::new());
//!
//! let logs = ingestor.parse_file(Path::new("logs/3.json")).unwrap();
//! let logs = ingestor.normalize(logs);
//! let summary = ingestor.write_table(&logs, Path::new("logs/3.json")).unwrap();
//!
//! println!("Wrote {}", summary.output_path.display());
//! ```

// Public modules
pub mod config;
pub mod formats;
pub mod ingestor;
pub mod normalize;
pub mod types;
pub mod writer;

// Re-export main types for convenience
pub use config::{IngestConfig, TableCompression, DEFAULT_OUTPUT_DIR};
pub use formats::{parse_json_str, parse_log_file, LogFormat};
pub use ingestor::Ingestor;
pub use normalize::{normalize_frame, normalize_logs};
pub use types::{FrameData, IngestError, LogInfo, LogType, Result};
pub use writer::{save_parsed_logs, table_schema, TableRow, WriteSummary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
