//! Robot-voice excitation.
//!
//! The natural residual is replaced by an impulse train at a fixed pitch
//! period, each impulse scaled by the RMS gain of the frame it falls in.
//! Driving the synthesis filter with it keeps the formants (they live in the
//! unchanged coefficients) while flattening the pitch to a monotone buzz.

use serde::Serialize;
use tracing::debug;

use crate::config::RobotConfig;
use crate::error::{LpcError, LpcResult};
use crate::excitation::Excitation;

/// Per-frame gains and the pulse-train excitation built from them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RobotVoice {
    /// RMS gain of each excitation frame.
    pub gains: Vec<f64>,
    /// Impulse train of length `gains.len() * frame_skip`.
    pub excitation: Vec<f64>,
}

/// Root-mean-square energy of every excitation frame.
///
/// The mean runs over the whole frame, including its zero prefix.
pub fn frame_gains(excitation: &Excitation) -> Vec<f64> {
    excitation.iter().map(rms).collect()
}

/// Root-mean-square of a signal segment; zero for an empty segment.
pub fn rms(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let mean_square = samples.iter().map(|s| s * s).sum::<f64>() / samples.len() as f64;
    mean_square.sqrt()
}

/// Builds an impulse train with one impulse every `pitch_period` samples.
///
/// The output has `gains.len() * frame_skip` samples. The impulse at sample
/// `n` equals `gains[n / frame_skip]`; every other sample is zero.
pub fn pulse_train(gains: &[f64], pitch_period: usize, frame_skip: usize) -> LpcResult<Vec<f64>> {
    if pitch_period == 0 {
        return Err(LpcError::invalid_param("pitch_period", "must be positive"));
    }
    if frame_skip == 0 {
        return Err(LpcError::invalid_param("frame_skip", "must be positive"));
    }

    let mut out = vec![0.0; gains.len() * frame_skip];
    for n in (0..out.len()).step_by(pitch_period) {
        out[n] = gains[n / frame_skip];
    }
    Ok(out)
}

/// Computes frame gains and the robot-voice excitation in one pass.
pub fn robot_voice(
    excitation: &Excitation,
    config: &RobotConfig,
    frame_skip: usize,
) -> LpcResult<RobotVoice> {
    config.validate()?;

    let gains = frame_gains(excitation);
    let pulses = pulse_train(&gains, config.pitch_period, frame_skip)?;

    debug!(
        frames = gains.len(),
        pitch_period = config.pitch_period,
        samples = pulses.len(),
        "robot excitation built"
    );

    Ok(RobotVoice {
        gains,
        excitation: pulses,
    })
}
