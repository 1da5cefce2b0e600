//! All-pole resynthesis.
//!
//! The synthesizer inverts the analysis filter by recursion over its own
//! output:
//!
//! ```text
//! y[n] = e[n] - sum_{k=1}^{min(n, taps)} A[n / frame_skip, k] * y[n - k]
//! ```
//!
//! Coefficients switch abruptly at every `frame_skip` boundary.

use tracing::debug;

use crate::coeffs::Coefficients;
use crate::config::SynthesisConfig;
use crate::error::{LpcError, LpcResult};

/// All-pole synthesis filter with a fixed tap count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LpcSynthesizer {
    taps: usize,
}

impl Default for LpcSynthesizer {
    fn default() -> Self {
        Self::from_config(&SynthesisConfig::default())
    }
}

impl LpcSynthesizer {
    /// Creates a synthesizer that applies at most `taps` feedback taps per sample.
    pub fn new(taps: usize) -> Self {
        Self { taps }
    }

    /// Creates a synthesizer from configuration.
    pub fn from_config(config: &SynthesisConfig) -> Self {
        Self::new(config.taps)
    }

    /// Number of feedback taps.
    pub fn taps(&self) -> usize {
        self.taps
    }

    /// Runs `excitation` through the all-pole filter and returns a new buffer.
    ///
    /// # Arguments
    /// * `excitation` - Flattened excitation; sample `n` belongs to frame `n / frame_skip`
    /// * `coefficients` - One set per frame, each with at least `taps + 1` values
    /// * `frame_skip` - Samples per frame in the flattened signal
    pub fn synthesize(
        &self,
        excitation: &[f64],
        coefficients: &Coefficients,
        frame_skip: usize,
    ) -> LpcResult<Vec<f64>> {
        if frame_skip == 0 {
            return Err(LpcError::invalid_param("frame_skip", "must be positive"));
        }
        if excitation.is_empty() {
            return Ok(Vec::new());
        }

        let frames_needed = (excitation.len() - 1) / frame_skip + 1;
        if frames_needed > coefficients.len() {
            return Err(LpcError::mismatch(
                "frame count",
                frames_needed,
                coefficients.len(),
            ));
        }
        if coefficients.order() < self.taps {
            return Err(LpcError::InsufficientTaps {
                required: self.taps + 1,
                found: coefficients.order() + 1,
            });
        }

        let mut out = excitation.to_vec();
        for n in 0..out.len() {
            let a = coefficients.set(n / frame_skip);
            let mut acc = out[n];
            for k in 1..=n.min(self.taps) {
                acc -= a[k] * out[n - k];
            }
            out[n] = acc;
        }

        debug!(
            samples = out.len(),
            frames = frames_needed,
            taps = self.taps,
            "synthesis complete"
        );

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn broadcast(nframes: usize, set: &[f64]) -> Coefficients {
        Coefficients::from_rows(&vec![set.to_vec(); nframes]).unwrap()
    }

    #[test]
    fn test_first_sample_passes_through() {
        let synth = LpcSynthesizer::new(2);
        let coeffs = broadcast(1, &[1.0, -0.5, 0.2]);
        let out = synth.synthesize(&[0.7, 0.0, 0.0], &coeffs, 3).unwrap();
        assert_eq!(out[0], 0.7);
    }

    #[test]
    fn test_impulse_response_single_pole() {
        // 1 / (1 - 0.5 z^-1)
        let synth = LpcSynthesizer::new(1);
        let coeffs = broadcast(1, &[1.0, -0.5]);
        let out = synth.synthesize(&[1.0, 0.0, 0.0, 0.0], &coeffs, 4).unwrap();
        assert_eq!(out, vec![1.0, 0.5, 0.25, 0.125]);
    }

    #[test]
    fn test_tap_cap_ignores_higher_coefficients() {
        let excitation = [1.0, 0.0, 0.0, 0.0, 0.0];
        let coeffs = broadcast(1, &[1.0, -0.5, 100.0, 100.0]);

        let one_tap = LpcSynthesizer::new(1)
            .synthesize(&excitation, &coeffs, 5)
            .unwrap();
        assert_eq!(one_tap, vec![1.0, 0.5, 0.25, 0.125, 0.0625]);
    }

    #[test]
    fn test_early_samples_use_available_history() {
        // taps = 3, so y[1] uses k = 1 only and y[2] uses k = 1, 2
        let synth = LpcSynthesizer::new(3);
        let coeffs = broadcast(1, &[1.0, -1.0, -1.0, -1.0]);
        let out = synth.synthesize(&[1.0, 0.0, 0.0, 0.0], &coeffs, 4).unwrap();
        assert_eq!(out, vec![1.0, 1.0, 2.0, 4.0]);
    }

    #[test]
    fn test_coefficients_switch_at_frame_boundary() {
        let synth = LpcSynthesizer::new(1);
        let coeffs = Coefficients::from_rows(&[vec![1.0, -1.0], vec![1.0, 0.0]]).unwrap();
        let out = synth.synthesize(&[1.0, 0.0, 0.0, 0.0], &coeffs, 2).unwrap();
        // frame 0 accumulates, frame 1 has no feedback
        assert_eq!(out, vec![1.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_input_is_not_modified() {
        let synth = LpcSynthesizer::new(1);
        let coeffs = broadcast(1, &[1.0, -0.5]);
        let excitation = vec![1.0, 0.0, 0.0];
        let out = synth.synthesize(&excitation, &coeffs, 3).unwrap();
        assert_eq!(excitation, vec![1.0, 0.0, 0.0]);
        assert_ne!(out, excitation);
    }

    #[test]
    fn test_empty_excitation() {
        let synth = LpcSynthesizer::default();
        let coeffs = Coefficients::identity(0, 10);
        assert!(synth.synthesize(&[], &coeffs, 100).unwrap().is_empty());
    }

    #[test]
    fn test_too_few_coefficient_sets() {
        let synth = LpcSynthesizer::new(1);
        let coeffs = broadcast(2, &[1.0, -0.5]);
        let result = synth.synthesize(&[0.0; 5], &coeffs, 2);
        assert!(matches!(
            result,
            Err(LpcError::DimensionMismatch { expected: 3, found: 2, .. })
        ));
    }

    #[test]
    fn test_insufficient_taps() {
        let synth = LpcSynthesizer::default();
        let coeffs = Coefficients::identity(1, 8);
        let result = synth.synthesize(&[0.0; 10], &coeffs, 10);
        assert!(matches!(
            result,
            Err(LpcError::InsufficientTaps {
                required: 11,
                found: 9
            })
        ));
    }

    #[test]
    fn test_zero_frame_skip() {
        let synth = LpcSynthesizer::new(1);
        let coeffs = broadcast(1, &[1.0, 0.0]);
        assert!(synth.synthesize(&[1.0], &coeffs, 0).is_err());
    }

    #[test]
    fn test_default_taps() {
        assert_eq!(LpcSynthesizer::default().taps(), crate::config::SYNTHESIS_TAPS);
    }
}
