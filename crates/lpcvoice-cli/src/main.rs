//! lpcvoice CLI - LPC analysis, resynthesis and robot voice
//!
//! This binary frames WAV audio, fits linear-prediction coefficients, and
//! drives the all-pole synthesizer with either the true residual or a
//! fixed-pitch pulse train.

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use lpcvoice_cli::commands;
use lpcvoice_cli::input::ConfigArgs;
use lpcvoice_core::LpcError;

/// lpcvoice - Linear predictive coding voice tools
#[derive(Parser)]
#[command(name = "lpcvoice")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a WAV file and report per-frame residual gains
    Analyze {
        /// Path to the input WAV file
        #[arg(short, long)]
        input: String,

        #[command(flatten)]
        config: ConfigArgs,

        /// Include per-frame coefficient sets in the report
        #[arg(long)]
        coefficients: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Resynthesize a WAV file from its own residual
    Resynth {
        /// Path to the input WAV file
        #[arg(short, long)]
        input: String,

        /// Path of the WAV file to write
        #[arg(short, long)]
        output: String,

        #[command(flatten)]
        config: ConfigArgs,

        /// Peak-normalize the output before writing
        #[arg(long)]
        normalize: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Render a fixed-pitch robot voice from a WAV file
    Robot {
        /// Path to the input WAV file
        #[arg(short, long)]
        input: String,

        /// Path of the WAV file to write
        #[arg(short, long)]
        output: String,

        #[command(flatten)]
        config: ConfigArgs,

        /// Peak-normalize the output before writing
        #[arg(long)]
        normalize: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration as JSON
    Config {
        #[command(flatten)]
        config: ConfigArgs,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Analyze {
            input,
            config,
            coefficients,
            json,
        } => commands::analyze::run(&input, &config, coefficients, json),
        Commands::Resynth {
            input,
            output,
            config,
            normalize,
            json,
        } => commands::resynth::run(&input, &output, &config, normalize, json),
        Commands::Robot {
            input,
            output,
            config,
            normalize,
            json,
        } => commands::robot::run(&input, &output, &config, normalize, json),
        Commands::Config { config, pretty } => commands::config::run(&config, pretty),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            match e.chain().find_map(|cause| cause.downcast_ref::<LpcError>()) {
                Some(lpc) => eprintln!(
                    "{} [{}]: {:#}",
                    colored::Colorize::red("error"),
                    lpc.code(),
                    e
                ),
                None => eprintln!("{}: {:#}", colored::Colorize::red("error"), e),
            }
            ExitCode::from(1)
        }
    }
}
