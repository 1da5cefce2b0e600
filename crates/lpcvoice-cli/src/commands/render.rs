//! Shared output handling for commands that write audio.

use anyhow::{Context, Result};
use colored::Colorize;
use lpcvoice_core::wav::normalize_peak;
use lpcvoice_core::WavResult;
use tracing::info;

use super::json_output::RenderReport;

/// Peak level used by `--normalize`.
pub(crate) const NORMALIZE_PEAK: f64 = 0.9;

/// Optionally normalizes `samples`, then encodes and writes them to `output`.
///
/// Returns the applied normalization gain and the encoded file.
pub(crate) fn write_output(
    mut samples: Vec<f64>,
    sample_rate: u32,
    output: &str,
    normalize: bool,
) -> Result<(f64, WavResult)> {
    let gain = if normalize {
        normalize_peak(&mut samples, NORMALIZE_PEAK)
    } else {
        1.0
    };

    let clipped = samples.iter().filter(|s| s.abs() > 1.0).count();
    if clipped > 0 {
        tracing::warn!(clipped, "output samples exceed full scale and will be clipped");
    }

    let wav = WavResult::from_mono(&samples, sample_rate)?;
    wav.write_to(output)
        .with_context(|| format!("Failed to write WAV file: {}", output))?;
    info!(output, samples = wav.num_samples, "wrote WAV");

    Ok((gain, wav))
}

/// Prints a render report for humans or as JSON.
pub(crate) fn print_report(title: &str, report: &RenderReport, json_output: bool) -> Result<()> {
    if json_output {
        let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
        println!("{}", json);
        return Ok(());
    }

    println!("{} {} -> {}", title.cyan().bold(), report.input, report.output);
    println!(
        "  {} {} frames, {} samples @ {} Hz",
        "Rendered:".dimmed(),
        report.num_frames,
        report.num_samples,
        report.sample_rate
    );
    if report.normalization_gain != 1.0 {
        println!(
            "  {} x{:.4}",
            "Normalized:".dimmed(),
            report.normalization_gain
        );
    }
    println!("  {} {}", "PCM hash:".dimmed(), &report.pcm_hash[..16]);
    if report.num_samples == 0 {
        println!(
            "{}",
            "Input is shorter than one frame; output is empty.".yellow()
        );
    }
    Ok(())
}
