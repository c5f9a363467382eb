//! JSON log parser
//!
//! Parses AVTrack360-style JSON logs:
//!
//! ```text
//! {
//!   "label": "...",                       // optional, applies to every session
//!   "data": [{
//!     "filename": "2.mp4",
//!     "hmd": "vive",
//!     "video_length_in_s": 60.0,          // optional
//!     "pitch_yaw_roll_data_hmd": [
//!       { "pitch": -13, "roll": 2, "sec": 0.266, "yaw": 0 },
//!       ...
//!     ]
//!   }]
//! }
//! ```

use super::LogFormatParser;
use crate::types::{FrameData, IngestError, LogInfo, LogType, Result};
use serde::Deserialize;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// JSON log parser
pub struct JsonLogParser;

impl LogFormatParser for JsonLogParser {
    const LOG_TYPE: LogType = LogType::Json;

    fn parse(path: &Path) -> Result<Vec<LogInfo>> {
        log::info!("Parsing JSON log file: {:?}", path);

        let file = File::open(path)?;
        let raw: RawLogFile = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            IngestError::MalformedInput(format!("Failed to parse JSON log {:?}: {}", path, e))
        })?;

        let logs = convert_log_file(raw)?;
        log::info!("Parsed {} sessions from {:?}", logs.len(), path);
        Ok(logs)
    }
}

/// Parse JSON log content held in memory
pub fn parse_json_str(content: &str) -> Result<Vec<LogInfo>> {
    let raw: RawLogFile = serde_json::from_str(content)
        .map_err(|e| IngestError::MalformedInput(format!("Failed to parse JSON log: {}", e)))?;
    convert_log_file(raw)
}

#[derive(Debug, Deserialize)]
struct RawLogFile {
    #[serde(default)]
    data: Vec<RawSession>,
    #[serde(default)]
    label: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawSession {
    #[serde(default)]
    filename: Option<String>,
    #[serde(default)]
    hmd: Option<String>,
    #[serde(default)]
    pitch_yaw_roll_data_hmd: Option<Vec<RawFrame>>,
    #[serde(default)]
    video_length_in_s: Option<f64>,
}

/// Frame fields stay loosely typed until coerced, so numeric strings are accepted
#[derive(Debug, Deserialize)]
struct RawFrame {
    pitch: Value,
    roll: Value,
    sec: Value,
    yaw: Value,
}

fn convert_log_file(raw: RawLogFile) -> Result<Vec<LogInfo>> {
    let label = raw.label;

    raw.data
        .into_iter()
        .enumerate()
        .map(|(index, session)| -> Result<LogInfo> {
            let frames = session
                .pitch_yaw_roll_data_hmd
                .unwrap_or_default()
                .iter()
                .enumerate()
                .map(|(frame_index, frame)| {
                    convert_frame(frame).map_err(|e| {
                        IngestError::MalformedInput(format!(
                            "session {} frame {}: {}",
                            index, frame_index, e
                        ))
                    })
                })
                .collect::<Result<Vec<_>>>()?;

            let log = LogInfo {
                filename: session.filename.unwrap_or_default(),
                hmd: session.hmd.unwrap_or_default(),
                data: frames,
                log_type: JsonLogParser::LOG_TYPE,
                label: label.clone(),
                video_length_s: session.video_length_in_s,
            };
            log::trace!(
                "Session {}: {} on {} ({} frames)",
                index,
                log.filename,
                log.hmd,
                log.frame_count()
            );
            Ok(log)
        })
        .collect()
}

fn convert_frame(frame: &RawFrame) -> std::result::Result<FrameData, String> {
    // Pitch is recorded as whole degrees; fractional input truncates toward zero.
    let pitch = coerce_integer("pitch", &frame.pitch)? as f64;

    Ok(FrameData {
        pitch,
        roll: coerce_float("roll", &frame.roll)?,
        sec: coerce_float("sec", &frame.sec)?,
        yaw: coerce_float("yaw", &frame.yaw)?,
    })
}

fn coerce_float(field: &str, value: &Value) -> std::result::Result<f64, String> {
    let parsed = match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| format!("field `{}` is not representable as f64", field))?,
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("field `{}` is not numeric: {:?}", field, s))?,
        other => return Err(format!("field `{}` is not numeric: {}", field, other)),
    };

    // "inf", "NaN" and overflowing literals like "1e400" parse but are not angles or times.
    if parsed.is_finite() {
        Ok(parsed)
    } else {
        Err(format!("field `{}` is not finite: {}", field, value))
    }
}

fn coerce_integer(field: &str, value: &Value) -> std::result::Result<i64, String> {
    match value {
        Value::Number(n) => match n.as_i64() {
            Some(v) => Ok(v),
            None => n
                .as_f64()
                .filter(|v| v.is_finite())
                .map(|v| v.trunc() as i64)
                .ok_or_else(|| format!("field `{}` is not representable as an integer", field)),
        },
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| format!("field `{}` is not an integer: {:?}", field, s)),
        other => Err(format!("field `{}` is not numeric: {}", field, other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_session() {
        let content = r#"{"data":[{"filename":"2.mp4","hmd":"vive","pitch_yaw_roll_data_hmd":[{"pitch":-13,"roll":2,"sec":0.266,"yaw":0}]}]}"#;

        let logs = parse_json_str(content).unwrap();
        assert_eq!(logs.len(), 1);

        let log = &logs[0];
        assert_eq!(log.filename, "2.mp4");
        assert_eq!(log.hmd, "vive");
        assert_eq!(log.log_type, LogType::Json);
        assert_eq!(log.label, None);
        assert_eq!(log.video_length_s, None);
        assert_eq!(log.data, vec![FrameData::new(-13.0, 2.0, 0.266, 0.0)]);
    }

    #[test]
    fn test_label_applies_to_every_session() {
        let content = r#"{
            "label": "exploration",
            "data": [
                {"filename": "1.mp4", "hmd": "rift", "video_length_in_s": 30.5, "pitch_yaw_roll_data_hmd": []},
                {"filename": "2.mp4", "hmd": "rift", "pitch_yaw_roll_data_hmd": []}
            ]
        }"#;

        let logs = parse_json_str(content).unwrap();
        assert_eq!(logs.len(), 2);
        assert!(logs.iter().all(|l| l.label.as_deref() == Some("exploration")));
        assert_eq!(logs[0].video_length_s, Some(30.5));
        assert_eq!(logs[1].video_length_s, None);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let content = r#"{"data":[{}]}"#;

        let logs = parse_json_str(content).unwrap();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].filename, "");
        assert_eq!(logs[0].hmd, "");
        assert!(logs[0].data.is_empty());
    }

    #[test]
    fn test_missing_data_array_yields_no_sessions() {
        let logs = parse_json_str(r#"{"label": "x"}"#).unwrap();
        assert!(logs.is_empty());
    }

    #[test]
    fn test_frame_order_preserved() {
        let content = r#"{"data":[{"filename":"3.mp4","hmd":"vive","pitch_yaw_roll_data_hmd":[
            {"pitch":1,"roll":0,"sec":0.1,"yaw":10},
            {"pitch":2,"roll":0,"sec":0.2,"yaw":20},
            {"pitch":3,"roll":0,"sec":0.3,"yaw":30}
        ]}]}"#;

        let logs = parse_json_str(content).unwrap();
        let secs: Vec<f64> = logs[0].data.iter().map(|f| f.sec).collect();
        assert_eq!(secs, vec![0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_numeric_coercion() {
        let content = r#"{"data":[{"pitch_yaw_roll_data_hmd":[
            {"pitch":"-7","roll":"1.5","sec":"2","yaw":"-45.25"},
            {"pitch":12.9,"roll":0,"sec":0,"yaw":0},
            {"pitch":-12.9,"roll":0,"sec":0,"yaw":0}
        ]}]}"#;

        let logs = parse_json_str(content).unwrap();
        let frames = &logs[0].data;
        assert_eq!(frames[0], FrameData::new(-7.0, 1.5, 2.0, -45.25));
        assert_eq!(frames[1].pitch, 12.0);
        assert_eq!(frames[2].pitch, -12.0);
    }

    #[test]
    fn test_missing_frame_field_is_malformed() {
        let content = r#"{"data":[{"pitch_yaw_roll_data_hmd":[{"pitch":1,"roll":0,"sec":0}]}]}"#;
        let result = parse_json_str(content);
        assert!(matches!(result, Err(IngestError::MalformedInput(_))));
    }

    #[test]
    fn test_non_numeric_frame_field_is_malformed() {
        let content = r#"{"data":[{"pitch_yaw_roll_data_hmd":[{"pitch":1,"roll":"left","sec":0,"yaw":0}]}]}"#;
        match parse_json_str(content) {
            Err(IngestError::MalformedInput(msg)) => assert!(msg.contains("roll")),
            other => panic!("expected MalformedInput, got {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_frame_field_is_malformed() {
        for field in ["roll", "sec", "yaw"] {
            for bad in ["inf", "-inf", "NaN", "1e400"] {
                let mut frame = serde_json::json!({"pitch": 0, "roll": 0, "sec": 0, "yaw": 0});
                frame[field] = Value::String(bad.to_string());
                let content = serde_json::json!({"data": [{"pitch_yaw_roll_data_hmd": [frame]}]});

                match parse_json_str(&content.to_string()) {
                    Err(IngestError::MalformedInput(msg)) => {
                        assert!(msg.contains(field), "{} missing from {:?}", field, msg)
                    }
                    other => panic!("{} = {:?}: expected MalformedInput, got {:?}", field, bad, other),
                }
            }
        }
    }

    #[test]
    fn test_finite_frames_normalize_into_range() {
        let content = r#"{"data":[{"pitch_yaw_roll_data_hmd":[
            {"pitch":0,"roll":"1e300","sec":0,"yaw":"1e300"},
            {"pitch":0,"roll":0,"sec":0,"yaw":-1e300}
        ]}]}"#;

        let logs = crate::normalize::normalize_logs(parse_json_str(content).unwrap());
        for frame in &logs[0].data {
            assert!(frame.yaw > -std::f64::consts::PI && frame.yaw <= std::f64::consts::PI);
        }
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let result = parse_json_str("{\"data\": [");
        assert!(matches!(result, Err(IngestError::MalformedInput(_))));
    }

    #[test]
    fn test_json_file_not_found() {
        let result = JsonLogParser::parse(Path::new("nonexistent.json"));
        assert!(matches!(result, Err(IngestError::IoError(_))));
    }
}
