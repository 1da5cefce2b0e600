//! JSON output types for machine-readable CLI output.

use serde::{Deserialize, Serialize};

/// JSON output for the `analyze` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeReport {
    /// Input file path
    pub input: String,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Number of input samples
    pub num_samples: usize,
    /// BLAKE3 hash of the input as 16-bit PCM
    pub pcm_hash: String,
    /// Coefficient estimation method
    pub fit_method: String,
    /// Frame length in samples
    pub frame_length: usize,
    /// Frame skip in samples
    pub frame_skip: usize,
    /// LPC model order
    pub order: usize,
    /// Number of analysed frames
    pub num_frames: usize,
    /// Summary of per-frame residual gains
    pub gain: GainSummary,
    /// RMS gain of each frame
    pub gains: Vec<f64>,
    /// Coefficient sets, one per frame (only when requested)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coefficients: Option<Vec<Vec<f64>>>,
}

/// Min / max / mean of a gain sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GainSummary {
    /// Smallest gain
    pub min: f64,
    /// Largest gain
    pub max: f64,
    /// Mean gain
    pub mean: f64,
}

impl GainSummary {
    /// Summarises `gains`; all zero for an empty slice.
    pub fn from_gains(gains: &[f64]) -> Self {
        if gains.is_empty() {
            return Self::default();
        }
        Self {
            min: gains.iter().copied().fold(f64::INFINITY, f64::min),
            max: gains.iter().copied().fold(0.0, f64::max),
            mean: gains.iter().sum::<f64>() / gains.len() as f64,
        }
    }
}

/// JSON output for the `resynth` and `robot` commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderReport {
    /// Input file path
    pub input: String,
    /// Output file path
    pub output: String,
    /// Number of analysed frames
    pub num_frames: usize,
    /// Number of output samples
    pub num_samples: usize,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Gain applied by peak normalization (1.0 when disabled)
    pub normalization_gain: f64,
    /// BLAKE3 hash of the output PCM
    pub pcm_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_gain_summary() {
        let summary = GainSummary::from_gains(&[0.5, 0.1, 0.3]);
        assert_eq!(summary.min, 0.1);
        assert_eq!(summary.max, 0.5);
        assert!((summary.mean - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_gain_summary_empty() {
        assert_eq!(GainSummary::from_gains(&[]), GainSummary::default());
    }

    #[test]
    fn test_coefficients_omitted_when_absent() {
        let report = AnalyzeReport {
            input: "in.wav".to_string(),
            sample_rate: 8000,
            num_samples: 0,
            pcm_hash: String::new(),
            fit_method: "burg".to_string(),
            frame_length: 200,
            frame_skip: 100,
            order: 10,
            num_frames: 0,
            gain: GainSummary::default(),
            gains: vec![],
            coefficients: None,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("coefficients").is_none());
        assert_eq!(json["order"], 10);
    }
}
