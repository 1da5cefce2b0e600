//! Robot command implementation
//!
//! Replaces the residual of a WAV file with a fixed-pitch impulse train and
//! resynthesises it.

use anyhow::{Context, Result};
use lpcvoice_core::LpcPipeline;
use std::process::ExitCode;

use crate::input::{load_audio, ConfigArgs};

use super::json_output::RenderReport;
use super::render::{print_report, write_output};

/// Run the robot command
///
/// # Arguments
/// * `input` - Path to the input WAV file
/// * `output` - Path of the WAV file to write
/// * `config_args` - Config file and overrides (including `--pitch-period`)
/// * `normalize` - Peak-normalize the output before encoding
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(
    input: &str,
    output: &str,
    config_args: &ConfigArgs,
    normalize: bool,
    json_output: bool,
) -> Result<ExitCode> {
    let report = render(input, output, config_args, normalize)?;
    print_report("Robot voice:", &report, json_output)?;
    Ok(ExitCode::SUCCESS)
}

/// Builds the robot voice and writes `output`.
pub fn render(
    input: &str,
    output: &str,
    config_args: &ConfigArgs,
    normalize: bool,
) -> Result<RenderReport> {
    let config = config_args.resolve()?;
    let audio = load_audio(input)?;
    let pipeline = LpcPipeline::new(config)?;

    let robot = pipeline
        .robotize(&audio.samples)
        .with_context(|| format!("Robot voice failed for {}", input))?;
    let num_frames = robot.gains.len();
    let (normalization_gain, wav) =
        write_output(robot.waveform, audio.sample_rate, output, normalize)?;

    Ok(RenderReport {
        input: input.to_string(),
        output: output.to_string(),
        num_frames,
        num_samples: wav.num_samples,
        sample_rate: wav.sample_rate,
        normalization_gain,
        pcm_hash: wav.pcm_hash,
    })
}
