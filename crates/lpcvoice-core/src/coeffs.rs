//! Per-frame LPC coefficient sets.

use serde::Serialize;

use crate::error::{LpcError, LpcResult};

/// One coefficient set of `order + 1` values per frame, stored row-major.
///
/// Index 0 of each set is the unity zero-lag term; indices `1..=order` are
/// the predictive taps of the analysis filter
/// `A(z) = 1 + a1 z^-1 + ... + ap z^-p`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Coefficients {
    data: Vec<f64>,
    order: usize,
}

impl Coefficients {
    /// Creates `nframes` identity sets (`[1, 0, ..., 0]`).
    pub fn identity(nframes: usize, order: usize) -> Self {
        let mut data = vec![0.0; nframes * (order + 1)];
        for set in data.chunks_exact_mut(order + 1) {
            set[0] = 1.0;
        }
        Self { data, order }
    }

    /// Builds coefficients from explicit rows of equal length.
    pub fn from_rows(rows: &[Vec<f64>]) -> LpcResult<Self> {
        let width = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            Some(_) => return Err(LpcError::invalid_param("coefficients", "empty set")),
            None => return Ok(Self::identity(0, 0)),
        };
        if let Some(bad) = rows.iter().find(|r| r.len() != width) {
            return Err(LpcError::mismatch("coefficient set length", width, bad.len()));
        }
        Ok(Self {
            data: rows.concat(),
            order: width - 1,
        })
    }

    /// Model order `p` (each set holds `p + 1` values).
    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.data.len() / (self.order + 1)
    }

    /// Whether there are no frames.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Coefficient set for frame `m`.
    ///
    /// # Panics
    /// Panics if `m >= self.len()`.
    pub fn set(&self, m: usize) -> &[f64] {
        let width = self.order + 1;
        &self.data[m * width..(m + 1) * width]
    }

    /// Mutable coefficient set for frame `m`.
    pub fn set_mut(&mut self, m: usize) -> &mut [f64] {
        let width = self.order + 1;
        &mut self.data[m * width..(m + 1) * width]
    }

    /// Iterates over sets in frame order.
    pub fn iter(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.order + 1)
    }
}
