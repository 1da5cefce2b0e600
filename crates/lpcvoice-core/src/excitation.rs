//! Per-frame prediction residual.

use serde::Serialize;

/// Prediction residual, one row of `frame_length` samples per frame.
///
/// Only the final `frame_skip` samples of each row are meaningful: the first
/// `order` samples of every frame lack history and are left at zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Excitation {
    data: Vec<f64>,
    frame_length: usize,
}

impl Excitation {
    /// Creates an all-zero excitation.
    pub fn zeros(nframes: usize, frame_length: usize) -> Self {
        Self {
            data: vec![0.0; nframes * frame_length],
            frame_length,
        }
    }

    /// Builds an excitation from explicit rows of equal length.
    pub fn from_rows(rows: &[Vec<f64>]) -> Option<Self> {
        let frame_length = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|r| r.len() != frame_length) {
            return None;
        }
        Some(Self {
            data: rows.concat(),
            frame_length,
        })
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        if self.frame_length == 0 {
            0
        } else {
            self.data.len() / self.frame_length
        }
    }

    /// Whether there are no frames.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Samples per frame.
    pub fn frame_length(&self) -> usize {
        self.frame_length
    }

    /// Residual of frame `m`.
    pub fn frame(&self, m: usize) -> &[f64] {
        &self.data[m * self.frame_length..(m + 1) * self.frame_length]
    }

    pub(crate) fn frame_mut(&mut self, m: usize) -> &mut [f64] {
        &mut self.data[m * self.frame_length..(m + 1) * self.frame_length]
    }

    /// Iterates over frames in order.
    pub fn iter(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.frame_length.max(1))
    }

    /// Flattens the residual into a single `len() * frame_skip` signal.
    ///
    /// Each frame contributes its last `frame_skip` samples, which lines sample
    /// `n` of the result up with frame `n / frame_skip`. When frames leave gaps
    /// (`frame_skip > frame_length`) the whole frame is used and the rest of its
    /// segment is zero.
    pub fn concatenate_tails(&self, frame_skip: usize) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.len() * frame_skip);
        for frame in self.iter() {
            if frame_skip <= self.frame_length {
                out.extend_from_slice(&frame[self.frame_length - frame_skip..]);
            } else {
                out.extend_from_slice(frame);
                out.resize(out.len() + frame_skip - self.frame_length, 0.0);
            }
        }
        out
    }
}
