//! Waveform framing.
//!
//! Frame `m` starts at waveform offset `m * frame_skip` and spans
//! `frame_length` samples. Frames overlap when `frame_skip < frame_length`
//! and leave gaps when `frame_skip > frame_length`.

/// Number of frames extracted from a waveform of `len` samples.
///
/// This is `floor((len - frame_length) / frame_skip)`, and zero when the
/// waveform is shorter than one frame. Note that a waveform of exactly
/// `frame_length` samples also yields zero frames.
pub fn frame_count(len: usize, frame_length: usize, frame_skip: usize) -> usize {
    if frame_skip == 0 {
        return 0;
    }
    len.saturating_sub(frame_length) / frame_skip
}

/// A batch of equal-length frames stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSet {
    data: Vec<f64>,
    frame_length: usize,
}

impl FrameSet {
    /// Slices `waveform` into frames.
    pub fn from_waveform(waveform: &[f64], frame_length: usize, frame_skip: usize) -> Self {
        let nframes = frame_count(waveform.len(), frame_length, frame_skip);
        let mut data = Vec::with_capacity(nframes * frame_length);
        for m in 0..nframes {
            let start = m * frame_skip;
            data.extend_from_slice(&waveform[start..start + frame_length]);
        }
        Self { data, frame_length }
    }

    /// Builds a frame set from explicit rows, which must all have the same length.
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

    /// Whether the set holds no frames.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Samples per frame.
    pub fn frame_length(&self) -> usize {
        self.frame_length
    }

    /// Samples of frame `m`.
    ///
    /// # Panics
    /// Panics if `m >= self.len()`.
    pub fn frame(&self, m: usize) -> &[f64] {
        &self.data[m * self.frame_length..(m + 1) * self.frame_length]
    }

    /// Iterates over frames in order.
    pub fn iter(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.frame_length.max(1))
    }
}
