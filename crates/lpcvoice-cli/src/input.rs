//! Configuration loading and command-line overrides.

use anyhow::{Context, Result};
use clap::Args;
use lpcvoice_core::{read_wav, FitMethod, LpcConfig, WavAudio};
use std::path::Path;

/// Command-line overrides applied on top of the config file.
#[derive(Debug, Clone, Default, Args)]
pub struct ConfigArgs {
    /// Path to a JSON config file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Frame length in samples
    #[arg(long)]
    pub frame_length: Option<usize>,

    /// Frame skip (hop) in samples
    #[arg(long)]
    pub frame_skip: Option<usize>,

    /// LPC model order
    #[arg(long)]
    pub order: Option<usize>,

    /// Synthesis filter taps
    #[arg(long)]
    pub taps: Option<usize>,

    /// Robot-voice pitch period in samples
    #[arg(long)]
    pub pitch_period: Option<usize>,

    /// Coefficient estimation method (burg, autocorrelation)
    #[arg(long)]
    pub method: Option<FitMethod>,
}

impl ConfigArgs {
    /// Loads the config file (or defaults), applies overrides and validates.
    pub fn resolve(&self) -> Result<LpcConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(Path::new(path))?,
            None => LpcConfig::default(),
        };

        if let Some(v) = self.frame_length {
            config.analysis.frame_length = v;
        }
        if let Some(v) = self.frame_skip {
            config.analysis.frame_skip = v;
        }
        if let Some(v) = self.order {
            config.analysis.order = v;
        }
        if let Some(v) = self.taps {
            config.synthesis.taps = v;
        }
        if let Some(v) = self.pitch_period {
            config.robot.pitch_period = v;
        }
        if let Some(v) = self.method {
            config.fit_method = v;
        }

        config.validate().context("Invalid configuration")?;
        Ok(config)
    }
}

/// Reads and parses a JSON config file.
pub fn load_config(path: &Path) -> Result<LpcConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    LpcConfig::from_json_str(&text)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Reads a mono WAV input.
pub fn load_audio(path: &str) -> Result<WavAudio> {
    read_wav(path).with_context(|| format!("Failed to read WAV file: {}", path))
}
