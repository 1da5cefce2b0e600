//! WAV decoding.

use std::io::{Cursor, Read};
use std::path::Path;

use tracing::debug;

use crate::error::{LpcError, LpcResult};

/// Decoded mono audio.
#[derive(Debug, Clone, PartialEq)]
pub struct WavAudio {
    /// Samples in `[-1.0, 1.0]`.
    pub samples: Vec<f64>,
    /// Sample rate in Hz.
    pub sample_rate: u32,
}

impl WavAudio {
    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

/// Reads a mono WAV file from disk.
pub fn read_wav(path: impl AsRef<Path>) -> LpcResult<WavAudio> {
    let reader = hound::WavReader::open(path.as_ref())?;
    decode(reader)
}

/// Decodes mono WAV data held in memory.
pub fn decode_wav(bytes: &[u8]) -> LpcResult<WavAudio> {
    let reader = hound::WavReader::new(Cursor::new(bytes))?;
    decode(reader)
}

fn decode<R: Read>(reader: hound::WavReader<R>) -> LpcResult<WavAudio> {
    let spec = reader.spec();
    if spec.channels != 1 {
        return Err(LpcError::unsupported(format!(
            "expected mono audio, found {} channels",
            spec.channels
        )));
    }

    let samples: Vec<f64> = match spec.sample_format {
        hound::SampleFormat::Int => {
            let max_val = (1i64 << (spec.bits_per_sample - 1)) as f64;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f64 / max_val))
                .collect::<Result<_, _>>()?
        }
        hound::SampleFormat::Float => reader
            .into_samples::<f32>()
            .map(|s| s.map(f64::from))
            .collect::<Result<_, _>>()?,
    };

    debug!(
        samples = samples.len(),
        sample_rate = spec.sample_rate,
        bits = spec.bits_per_sample,
        "decoded WAV"
    );

    Ok(WavAudio {
        samples,
        sample_rate: spec.sample_rate,
    })
}
