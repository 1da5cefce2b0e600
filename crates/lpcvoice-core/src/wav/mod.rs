//! WAV input and output.
//!
//! Decoding accepts mono integer or float WAV data and normalizes samples to
//! `[-1.0, 1.0]`. Encoding always produces 16-bit mono PCM and records a
//! BLAKE3 hash of the PCM payload so outputs can be compared by content.

mod reader;
mod writer;


pub use reader::{decode_wav, read_wav, WavAudio};
pub use writer::{normalize_peak, samples_to_pcm16, WavResult};
