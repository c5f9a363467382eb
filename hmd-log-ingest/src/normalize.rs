//! Angle normalization
//!
//! Converts parsed frames from degrees to radians and bounds their range:
//! yaw is wrapped into (-π, π], pitch is clamped to [-π/2, π/2] and roll is
//! converted only. The sign convention of the recording is kept as is:
//! turning left is negative yaw and pitching up is negative pitch.

use crate::types::{FrameData, LogInfo};
use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Degrees to radians factor
pub const RADIANS: f64 = PI / 180.0;

/// Normalize every frame of every session in place and return the sessions
pub fn normalize_logs(mut logs: Vec<LogInfo>) -> Vec<LogInfo> {
    for log in logs.iter_mut() {
        log::trace!("Normalizing {} frames of {}", log.data.len(), log.filename);
        for frame in log.data.iter_mut() {
            normalize_frame(frame);
        }
    }
    logs
}

/// Normalize one frame's angles in place; `sec` is left untouched
pub fn normalize_frame(frame: &mut FrameData) {
    let pitch_rad = frame.pitch * RADIANS;
    let yaw_rad = frame.yaw * RADIANS;
    let roll_rad = frame.roll * RADIANS;

    frame.yaw = wrap_yaw(yaw_rad);
    frame.pitch = clamp_pitch(pitch_rad);
    frame.roll = roll_rad;
}

/// Wrap a yaw angle in radians into (-π, π]
pub fn wrap_yaw(yaw_rad: f64) -> f64 {
    // rem_euclid keeps the intermediate in [0, 2π) for negative input.
    let wrapped = (yaw_rad + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        PI
    } else {
        wrapped
    }
}

/// Clamp a pitch angle in radians into [-π/2, π/2]
pub fn clamp_pitch(pitch_rad: f64) -> f64 {
    pitch_rad.clamp(-FRAC_PI_2, FRAC_PI_2)
}
