//! LPC Voice Core
//!
//! Frame-based linear predictive coding (LPC) of speech: analysis into
//! per-frame coefficients and prediction residual, all-pole resynthesis, and
//! a "robot voice" effect that swaps the residual for a fixed-pitch impulse
//! train.
//!
//! # Overview
//!
//! ```text
//! waveform -> framer -> fitter -> residual -> (coefficients, excitation)
//!                                               |-> synthesizer        -> reconstruction
//!                                               '-> robot voice -> synthesizer -> robot voice
//! ```
//!
//! Every stage is an independent, deterministic batch computation over
//! in-memory buffers. Coefficient estimation is pluggable through
//! [`CoefficientFitter`].
//!
//! # Example
//!
//! ```ignore
//! use lpcvoice_core::{read_wav, LpcConfig, LpcPipeline, WavResult};
//!
//! let audio = read_wav("speech.wav")?;
//! let pipeline = LpcPipeline::new(LpcConfig::default())?;
//! let robot = pipeline.robotize(&audio.samples)?;
//! WavResult::from_mono(&robot.waveform, audio.sample_rate)?.write_to("robot.wav")?;
//! ```
//!
//! # Crate Structure
//!
//! - [`frame`] - Frame counting and slicing
//! - [`fitter`] - Coefficient estimators (Burg, autocorrelation, fixed)
//! - [`analysis`] - Residual computation
//! - [`synthesis`] - All-pole resynthesis
//! - [`robot`] - Frame gains and pulse-train excitation
//! - [`pipeline`] - The stages chained together
//! - [`wav`] - WAV decode/encode

pub mod analysis;
pub mod coeffs;
pub mod config;
pub mod error;
pub mod excitation;
pub mod fitter;
pub mod frame;
pub mod pipeline;
pub mod robot;
pub mod synthesis;
pub mod wav;

// Re-export main types at crate root
pub use analysis::{analyze, residual, Analysis};
pub use coeffs::Coefficients;
pub use config::{
    AnalysisConfig, FitMethod, LpcConfig, RobotConfig, SynthesisConfig, SYNTHESIS_TAPS,
};
pub use error::{LpcError, LpcResult};
pub use excitation::Excitation;
pub use fitter::{AutocorrelationFitter, BurgFitter, CoefficientFitter, FixedFitter};
pub use frame::{frame_count, FrameSet};
pub use pipeline::{LpcPipeline, RobotOutput};
pub use robot::{frame_gains, pulse_train, robot_voice, RobotVoice};
pub use synthesis::LpcSynthesizer;
pub use wav::{decode_wav, read_wav, WavAudio, WavResult};
