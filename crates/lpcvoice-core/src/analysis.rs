//! Framing and residual computation.
//!
//! The residual of frame `m` is the output of its own analysis (whitening)
//! filter:
//!
//! ```text
//! e[m, n] = sum_{k=0}^{order} A[m, k] * frame[m, n - k]    for n in order..frame_length
//! ```
//!
//! Samples `n < order` have no in-frame history and stay zero.

use serde::Serialize;
use tracing::debug;

use crate::coeffs::Coefficients;
use crate::config::AnalysisConfig;
use crate::error::{LpcError, LpcResult};
use crate::excitation::Excitation;
use crate::fitter::CoefficientFitter;
use crate::frame::FrameSet;

/// Result of analysing a waveform.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    /// One coefficient set per frame.
    pub coefficients: Coefficients,
    /// One residual row per frame, aligned with `coefficients`.
    pub excitation: Excitation,
}

impl Analysis {
    /// Number of analysed frames.
    pub fn num_frames(&self) -> usize {
        self.coefficients.len()
    }
}

/// Frames `waveform`, fits coefficients for every frame and computes the residual.
///
/// A waveform too short for a single frame produces an empty analysis.
pub fn analyze(
    waveform: &[f64],
    config: &AnalysisConfig,
    fitter: &dyn CoefficientFitter,
) -> LpcResult<Analysis> {
    config.validate()?;

    let frames = FrameSet::from_waveform(waveform, config.frame_length, config.frame_skip);
    let coefficients = fitter.fit(&frames, config.order)?;
    let excitation = residual(&frames, &coefficients)?;

    debug!(
        samples = waveform.len(),
        frames = frames.len(),
        order = config.order,
        fitter = fitter.name(),
        "analysis complete"
    );

    Ok(Analysis {
        coefficients,
        excitation,
    })
}

/// Applies each frame's analysis filter to that frame.
pub fn residual(frames: &FrameSet, coefficients: &Coefficients) -> LpcResult<Excitation> {
    if frames.len() != coefficients.len() {
        return Err(LpcError::mismatch(
            "frame count",
            frames.len(),
            coefficients.len(),
        ));
    }

    let order = coefficients.order();
    let frame_length = frames.frame_length();
    let mut excitation = Excitation::zeros(frames.len(), frame_length);

    for (m, frame) in frames.iter().enumerate() {
        let a = coefficients.set(m);
        let out = excitation.frame_mut(m);
        for n in order..frame_length {
            let mut acc = 0.0;
            for k in 0..=order {
                acc += a[k] * frame[n - k];
            }
            out[n] = acc;
        }
    }

    Ok(excitation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitter::{BurgFitter, FixedFitter};
    use pretty_assertions::assert_eq;

    fn ramp(len: usize) -> Vec<f64> {
        (0..len).map(|i| i as f64).collect()
    }

    #[test]
    fn test_residual_hand_coefficients() {
        let frames = FrameSet::from_rows(&[vec![1.0, 2.0, 4.0, 8.0]]).unwrap();
        let coeffs = Coefficients::from_rows(&[vec![1.0, -2.0]]).unwrap();
        let e = residual(&frames, &coeffs).unwrap();

        // x[n] - 2 x[n-1] vanishes for a doubling sequence
        assert_eq!(e.frame(0), &[0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_residual_first_difference() {
        let frames = FrameSet::from_rows(&[vec![1.0, 3.0, 6.0, 10.0]]).unwrap();
        let coeffs = Coefficients::from_rows(&[vec![1.0, -1.0]]).unwrap();
        let e = residual(&frames, &coeffs).unwrap();

        assert_eq!(e.frame(0), &[0.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_residual_uses_each_frames_own_coefficients() {
        let frames = FrameSet::from_rows(&[vec![1.0, 1.0, 1.0], vec![1.0, 1.0, 1.0]]).unwrap();
        let coeffs = Coefficients::from_rows(&[vec![1.0, -1.0], vec![1.0, 1.0]]).unwrap();
        let e = residual(&frames, &coeffs).unwrap();

        assert_eq!(e.frame(0), &[0.0, 0.0, 0.0]);
        assert_eq!(e.frame(1), &[0.0, 2.0, 2.0]);
    }

    #[test]
    fn test_residual_zero_prefix() {
        let waveform: Vec<f64> = (0..1000).map(|n| (0.05 * n as f64).sin() + 0.3).collect();
        let config = AnalysisConfig::new(200, 100, 10);
        let analysis = analyze(&waveform, &config, &BurgFitter).unwrap();

        for frame in analysis.excitation.iter() {
            assert!(frame[..10].iter().all(|&s| s == 0.0));
        }
    }

    #[test]
    fn test_residual_frame_count_mismatch() {
        let frames = FrameSet::from_waveform(&ramp(50), 10, 10);
        let coeffs = Coefficients::identity(3, 2);
        assert!(matches!(
            residual(&frames, &coeffs),
            Err(LpcError::DimensionMismatch { expected: 4, found: 3, .. })
        ));
    }

    #[test]
    fn test_analyze_dimensions() {
        let waveform = ramp(1050);
        let config = AnalysisConfig::new(200, 100, 4);
        let fitter = FixedFitter::broadcast(vec![1.0, 0.0, 0.0, 0.0, 0.0]);
        let analysis = analyze(&waveform, &config, &fitter).unwrap();

        assert_eq!(analysis.num_frames(), 8);
        assert_eq!(analysis.excitation.len(), 8);
        assert_eq!(analysis.excitation.frame_length(), 200);
        assert_eq!(analysis.coefficients.order(), 4);
    }

    #[test]
    fn test_analyze_identity_filter_copies_frame() {
        let waveform = ramp(500);
        let config = AnalysisConfig::new(100, 50, 3);
        let fitter = FixedFitter::broadcast(vec![1.0, 0.0, 0.0, 0.0]);
        let analysis = analyze(&waveform, &config, &fitter).unwrap();

        // frame m starts at m * frame_skip
        let frame2 = analysis.excitation.frame(2);
        assert_eq!(frame2[..3], [0.0, 0.0, 0.0]);
        assert_eq!(frame2[3], 103.0);
        assert_eq!(frame2[99], 199.0);
    }

    #[test]
    fn test_analyze_short_waveform_is_empty() {
        let config = AnalysisConfig::new(200, 100, 10);
        let analysis = analyze(&ramp(150), &config, &BurgFitter).unwrap();

        assert_eq!(analysis.num_frames(), 0);
        assert!(analysis.excitation.is_empty());
    }

    #[test]
    fn test_analyze_rejects_invalid_config() {
        let config = AnalysisConfig::new(200, 0, 10);
        assert!(analyze(&ramp(1000), &config, &BurgFitter).is_err());
    }
}
