//! Burg's method.

use tracing::debug;

use super::{identity_set, CoefficientFitter};
use crate::error::{LpcError, LpcResult};

/// Burg lattice estimator.
///
/// Each stage picks the reflection coefficient that minimises the summed
/// forward and backward prediction error power, so every `|k| <= 1` and the
/// resulting synthesis filter is stable.
#[derive(Debug, Clone, Copy, Default)]
pub struct BurgFitter;

impl CoefficientFitter for BurgFitter {
    fn name(&self) -> &'static str {
        "burg"
    }

    fn fit_frame(&self, frame: &[f64], order: usize) -> LpcResult<Vec<f64>> {
        let n = frame.len();
        if order >= n {
            return Err(LpcError::fit(format!(
                "order {} needs more than {} samples",
                order, n
            )));
        }

        let mut a = identity_set(order);
        if order == 0 {
            return Ok(a);
        }

        let mut fwd = frame.to_vec();
        let mut bwd = frame.to_vec();

        let energy: f64 = frame.iter().map(|x| 2.0 * x * x).sum();
        let mut den = energy - frame[0] * frame[0] - frame[n - 1] * frame[n - 1];
        if den <= 0.0 {
            debug!(order, "silent frame, using identity coefficients");
            return Ok(a);
        }
        let floor = energy * f64::EPSILON;

        for k in 0..order {
            let mut num = 0.0;
            for i in 0..n - k - 1 {
                num += fwd[i + k + 1] * bwd[i];
            }
            let mu = -2.0 * num / den;

            // A_{k+1}(z) = A_k(z) + mu * z^-(k+1) * A_k(1/z)
            for i in 0..=(k + 1) / 2 {
                let lo = a[i] + mu * a[k + 1 - i];
                let hi = a[k + 1 - i] + mu * a[i];
                a[i] = lo;
                a[k + 1 - i] = hi;
            }

            for i in 0..n - k - 1 {
                let f = fwd[i + k + 1] + mu * bwd[i];
                let b = bwd[i] + mu * fwd[i + k + 1];
                fwd[i + k + 1] = f;
                bwd[i] = b;
            }

            den = (1.0 - mu * mu) * den - fwd[k + 1] * fwd[k + 1] - bwd[n - k - 2] * bwd[n - k - 2];
            if den <= floor {
                // The frame is exactly predictable at this order; higher taps stay zero.
                debug!(stage = k + 1, order, "burg recursion terminated early");
                break;
            }
        }

        Ok(a)
    }
}
