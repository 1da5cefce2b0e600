//! Coefficient estimation strategies.
//!
//! The analysis stage never estimates coefficients itself; it hands the whole
//! batch of frames to a [`CoefficientFitter`]. Two estimators are provided:
//!
//! - [`BurgFitter`] - Burg's lattice method (minimises forward and backward
//!   prediction error, always yields a stable synthesis filter)
//! - [`AutocorrelationFitter`] - autocorrelation method solved with the
//!   Levinson-Durbin recursion
//!
//! [`FixedFitter`] returns hand-constructed sets, which lets framing, residual
//! and synthesis be exercised without any estimator.

mod autocorrelation;
mod burg;
mod fixed;

#[cfg(test)]
mod tests;

pub use autocorrelation::{autocorrelation, AutocorrelationFitter};
pub use burg::BurgFitter;
pub use fixed::FixedFitter;

use crate::coeffs::Coefficients;
use crate::config::FitMethod;
use crate::error::{LpcError, LpcResult};
use crate::frame::FrameSet;

/// Fits an all-pole model to every frame of a batch.
pub trait CoefficientFitter {
    /// Short identifier used in logs and reports.
    fn name(&self) -> &'static str;

    /// Fits one frame, returning `order + 1` coefficients with `a[0] == 1`.
    fn fit_frame(&self, frame: &[f64], order: usize) -> LpcResult<Vec<f64>>;

    /// Fits every frame of `frames`, one coefficient set per frame.
    fn fit(&self, frames: &FrameSet, order: usize) -> LpcResult<Coefficients> {
        if !frames.is_empty() && order >= frames.frame_length() {
            return Err(LpcError::fit(format!(
                "order {} needs frames longer than {} samples",
                order,
                frames.frame_length()
            )));
        }

        let mut coeffs = Coefficients::identity(frames.len(), order);
        for (m, frame) in frames.iter().enumerate() {
            let set = self.fit_frame(frame, order)?;
            if set.len() != order + 1 {
                return Err(LpcError::mismatch("fitted set length", order + 1, set.len()));
            }
            coeffs.set_mut(m).copy_from_slice(&set);
        }
        Ok(coeffs)
    }
}

impl FitMethod {
    /// Returns the estimator for this method.
    pub fn fitter(self) -> Box<dyn CoefficientFitter> {
        match self {
            FitMethod::Burg => Box::new(BurgFitter),
            FitMethod::Autocorrelation => Box::new(AutocorrelationFitter),
        }
    }
}

/// Coefficients for a frame with no energy: the identity filter.
pub(crate) fn identity_set(order: usize) -> Vec<f64> {
    let mut a = vec![0.0; order + 1];
    a[0] = 1.0;
    a
}
