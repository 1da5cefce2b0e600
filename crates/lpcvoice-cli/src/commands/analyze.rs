//! Analyze command implementation
//!
//! Frames a WAV file, fits LPC coefficients and reports per-frame residual
//! gains.

use anyhow::{Context, Result};
use colored::Colorize;
use lpcvoice_core::{frame_gains, LpcPipeline, WavResult};
use std::process::ExitCode;

use crate::input::{load_audio, ConfigArgs};

use super::json_output::{AnalyzeReport, GainSummary};

/// Run the analyze command
///
/// # Arguments
/// * `input` - Path to the input WAV file
/// * `config_args` - Config file and overrides
/// * `coefficients` - Include per-frame coefficient sets in the report
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(
    input: &str,
    config_args: &ConfigArgs,
    coefficients: bool,
    json_output: bool,
) -> Result<ExitCode> {
    let report = build_report(input, config_args, coefficients)?;

    if json_output {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", json);
    } else {
        print_human(&report);
    }

    Ok(ExitCode::SUCCESS)
}

/// Analyses `input` and collects the report.
pub fn build_report(
    input: &str,
    config_args: &ConfigArgs,
    coefficients: bool,
) -> Result<AnalyzeReport> {
    let config = config_args.resolve()?;
    let audio = load_audio(input)?;
    let pipeline = LpcPipeline::new(config)?;

    let analysis = pipeline
        .analyze(&audio.samples)
        .with_context(|| format!("Analysis failed for {}", input))?;
    let gains = frame_gains(&analysis.excitation);
    let pcm_hash = WavResult::from_mono(&audio.samples, audio.sample_rate)?.pcm_hash;

    Ok(AnalyzeReport {
        input: input.to_string(),
        sample_rate: audio.sample_rate,
        num_samples: audio.samples.len(),
        pcm_hash,
        fit_method: pipeline.fitter_name().to_string(),
        frame_length: config.analysis.frame_length,
        frame_skip: config.analysis.frame_skip,
        order: config.analysis.order,
        num_frames: analysis.num_frames(),
        gain: GainSummary::from_gains(&gains),
        gains,
        coefficients: coefficients
            .then(|| analysis.coefficients.iter().map(<[f64]>::to_vec).collect()),
    })
}

fn print_human(report: &AnalyzeReport) {
    println!("{} {}", "Analyzing:".cyan().bold(), report.input);
    println!(
        "  {} {} samples @ {} Hz",
        "Audio:".dimmed(),
        report.num_samples,
        report.sample_rate
    );
    println!("  {} {}", "PCM hash:".dimmed(), &report.pcm_hash[..16]);
    println!(
        "  {} length {}, skip {}, order {} ({})",
        "Frames:".dimmed(),
        report.frame_length,
        report.frame_skip,
        report.order,
        report.fit_method
    );

    if report.num_frames == 0 {
        println!(
            "\n{}",
            "Input is shorter than one frame; nothing to analyse.".yellow()
        );
        return;
    }

    println!("\n{} {}", "Frames analysed:".green().bold(), report.num_frames);
    println!(
        "  {} min {:.6}  max {:.6}  mean {:.6}",
        "Residual gain:".dimmed(),
        report.gain.min,
        report.gain.max,
        report.gain.mean
    );
}
