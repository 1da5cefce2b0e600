//! Autocorrelation method with the Levinson-Durbin recursion.

use tracing::debug;

use super::{identity_set, CoefficientFitter};
use crate::error::{LpcError, LpcResult};

/// Autocorrelation-method estimator.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutocorrelationFitter;

/// Biased autocorrelation `r[l] = sum_i x[i] * x[i + l]` for lags `0..=max_lag`.
pub fn autocorrelation(frame: &[f64], max_lag: usize) -> Vec<f64> {
    (0..=max_lag)
        .map(|lag| {
            frame
                .iter()
                .zip(frame.iter().skip(lag))
                .map(|(x, y)| x * y)
                .sum()
        })
        .collect()
}

impl CoefficientFitter for AutocorrelationFitter {
    fn name(&self) -> &'static str {
        "autocorrelation"
    }

    fn fit_frame(&self, frame: &[f64], order: usize) -> LpcResult<Vec<f64>> {
        if order >= frame.len() {
            return Err(LpcError::fit(format!(
                "order {} needs more than {} samples",
                order,
                frame.len()
            )));
        }

        let r = autocorrelation(frame, order);
        let mut a = identity_set(order);
        if r[0] <= 0.0 {
            debug!(order, "silent frame, using identity coefficients");
            return Ok(a);
        }

        let mut err = r[0];
        let mut prev = a.clone();
        for i in 1..=order {
            let mut acc = r[i];
            for j in 1..i {
                acc += prev[j] * r[i - j];
            }
            let k = -acc / err;

            a[i] = k;
            for j in 1..i {
                a[j] = prev[j] + k * prev[i - j];
            }

            err *= 1.0 - k * k;
            if err <= r[0] * f64::EPSILON {
                debug!(stage = i, order, "levinson recursion terminated early");
                break;
            }
            prev.copy_from_slice(&a);
        }

        Ok(a)
    }
}
