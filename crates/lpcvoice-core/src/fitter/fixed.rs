//! Hand-constructed coefficient sets.

use super::CoefficientFitter;
use crate::coeffs::Coefficients;
use crate::error::{LpcError, LpcResult};
use crate::frame::FrameSet;

/// Returns predetermined coefficients instead of estimating them.
#[derive(Debug, Clone)]
pub enum FixedFitter {
    /// The same set for every frame.
    Broadcast(Vec<f64>),
    /// One set per frame; the frame count must match.
    PerFrame(Coefficients),
}

impl FixedFitter {
    /// Uses `set` for every frame.
    pub fn broadcast(set: Vec<f64>) -> Self {
        Self::Broadcast(set)
    }

    /// Uses row `m` of `coeffs` for frame `m`.
    pub fn per_frame(coeffs: Coefficients) -> Self {
        Self::PerFrame(coeffs)
    }
}

impl CoefficientFitter for FixedFitter {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn fit_frame(&self, _frame: &[f64], order: usize) -> LpcResult<Vec<f64>> {
        match self {
            FixedFitter::Broadcast(set) => {
                if set.len() != order + 1 {
                    return Err(LpcError::mismatch("fixed set length", order + 1, set.len()));
                }
                Ok(set.clone())
            }
            FixedFitter::PerFrame(_) => Err(LpcError::fit(
                "per-frame coefficients can only be fitted as a batch",
            )),
        }
    }

    fn fit(&self, frames: &FrameSet, order: usize) -> LpcResult<Coefficients> {
        match self {
            FixedFitter::Broadcast(set) => {
                if set.len() != order + 1 {
                    return Err(LpcError::mismatch("fixed set length", order + 1, set.len()));
                }
                let mut coeffs = Coefficients::identity(frames.len(), order);
                for m in 0..frames.len() {
                    coeffs.set_mut(m).copy_from_slice(set);
                }
                Ok(coeffs)
            }
            FixedFitter::PerFrame(coeffs) => {
                if coeffs.len() != frames.len() {
                    return Err(LpcError::mismatch("frame count", frames.len(), coeffs.len()));
                }
                if coeffs.order() != order {
                    return Err(LpcError::mismatch("model order", order, coeffs.order()));
                }
                Ok(coeffs.clone())
            }
        }
    }
}
