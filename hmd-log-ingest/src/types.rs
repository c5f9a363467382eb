//! Core types for the HMD log ingestion library
//!
//! This module defines the session and frame records produced by the format
//! parsers, rewritten in place by the normalizer and read by the table writer.

use std::fmt;

/// Result type for ingestion operations
pub type Result<T> = std::result::Result<T, IngestError>;

/// A single orientation sample
///
/// Angles are in degrees as parsed and in radians once normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameData {
    /// Up-down rotation; upward pitch is negative
    pub pitch: f64,
    /// Head tilt; never clamped or wrapped
    pub roll: f64,
    /// Playback time of the video in seconds
    pub sec: f64,
    /// Left-right rotation; turning left is negative
    pub yaw: f64,
}

impl FrameData {
    pub fn new(pitch: f64, roll: f64, sec: f64, yaw: f64) -> Self {
        Self {
            pitch,
            roll,
            sec,
            yaw,
        }
    }
}

/// Tag identifying the parser that produced a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogType {
    Json,
    Csv,
    Text,
}

impl LogType {
    /// Lowercase tag as stored in the `log_type` column
    pub fn as_str(&self) -> &'static str {
        match self {
            LogType::Json => "json",
            LogType::Csv => "csv",
            LogType::Text => "text",
        }
    }
}

impl fmt::Display for LogType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One parsed playback session
#[derive(Debug, Clone, PartialEq)]
pub struct LogInfo {
    /// Name of the played back video file
    pub filename: String,
    /// Name of the HMD used
    pub hmd: String,
    /// Frames in capture order
    pub data: Vec<FrameData>,
    /// Parser that produced this session
    pub log_type: LogType,
    /// Classification tag shared by every session of one log file
    pub label: Option<String>,
    /// Declared duration of the associated video
    pub video_length_s: Option<f64>,
}

impl LogInfo {
    /// Number of frames in this session
    pub fn frame_count(&self) -> usize {
        self.data.len()
    }
}

/// Errors that can occur during ingestion
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("Unsupported log format: {0}")]
    UnsupportedFormat(String),

    #[error("Unrecognized log file extension: {}", .0.as_deref().unwrap_or("<none>"))]
    UnrecognizedExtension(Option<String>),

    #[error("Malformed log input: {0}")]
    MalformedInput(String),

    #[error("No log sessions to write")]
    EmptyInput,

    #[error("Failed to write table: {0}")]
    TableWriteError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
