//! Config command implementation
//!
//! Prints the effective configuration after the config file and overrides
//! have been applied.

use anyhow::{Context, Result};
use std::process::ExitCode;

use crate::input::ConfigArgs;

/// Run the config command
///
/// # Arguments
/// * `config_args` - Config file and overrides
/// * `pretty` - Pretty-print the JSON
pub fn run(config_args: &ConfigArgs, pretty: bool) -> Result<ExitCode> {
    println!("{}", render(config_args, pretty)?);
    Ok(ExitCode::SUCCESS)
}

/// Resolves the configuration and serializes it.
pub fn render(config_args: &ConfigArgs, pretty: bool) -> Result<String> {
    let config = config_args.resolve()?;
    if pretty {
        Ok(config.to_json_pretty()?)
    } else {
        serde_json::to_string(&config).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lpcvoice_core::LpcConfig;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rendered_config_parses_back() {
        let args = ConfigArgs {
            order: Some(8),
            pitch_period: Some(64),
            ..ConfigArgs::default()
        };
        let json = render(&args, false).unwrap();
        let config = LpcConfig::from_json_str(&json).unwrap();
        assert_eq!(config.analysis.order, 8);
        assert_eq!(config.robot.pitch_period, 64);
        assert_eq!(config.analysis.frame_length, 200);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let args = ConfigArgs {
            order: Some(200),
            ..ConfigArgs::default()
        };
        assert!(render(&args, true).is_err());
    }
}
