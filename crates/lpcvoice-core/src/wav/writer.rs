//! 16-bit PCM encoding.

use std::io::Cursor;
use std::path::Path;

use crate::error::LpcResult;

/// Encoded mono WAV file.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the PCM data only.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples.
    pub num_samples: usize,
}

impl WavResult {
    /// Encodes mono samples as 16-bit PCM, clipping to `[-1.0, 1.0]`.
    pub fn from_mono(samples: &[f64], sample_rate: u32) -> LpcResult<Self> {
        let pcm = samples_to_pcm16(samples);
        let pcm_hash = blake3::hash(&pcm).to_hex().to_string();

        let spec = hound::WavSpec {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut wav_data = Vec::with_capacity(44 + pcm.len());
        {
            let mut writer = hound::WavWriter::new(Cursor::new(&mut wav_data), spec)?;
            for chunk in pcm.chunks_exact(2) {
                writer.write_sample(i16::from_le_bytes([chunk[0], chunk[1]]))?;
            }
            writer.finalize()?;
        }

        Ok(Self {
            wav_data,
            pcm_hash,
            sample_rate,
            num_samples: samples.len(),
        })
    }

    /// Writes the encoded file to disk.
    pub fn write_to(&self, path: impl AsRef<Path>) -> LpcResult<()> {
        std::fs::write(path, &self.wav_data)?;
        Ok(())
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }
}

/// Converts f64 samples to little-endian 16-bit PCM bytes, clipping to `[-1.0, 1.0]`.
pub fn samples_to_pcm16(samples: &[f64]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);
    for &sample in samples {
        let clipped = sample.clamp(-1.0, 1.0);
        let value = (clipped * 32767.0).round() as i16;
        pcm.extend_from_slice(&value.to_le_bytes());
    }
    pcm
}

/// Scales `samples` in place so the absolute peak equals `peak`.
///
/// Returns the applied gain; silent or non-finite input is left unchanged
/// and reports a gain of 1.0.
pub fn normalize_peak(samples: &mut [f64], peak: f64) -> f64 {
    let max_val = samples.iter().map(|s| s.abs()).fold(0.0_f64, f64::max);
    if max_val <= 0.0 || !max_val.is_finite() {
        return 1.0;
    }
    let scale = peak / max_val;
    for sample in samples.iter_mut() {
        *sample *= scale;
    }
    scale
}
