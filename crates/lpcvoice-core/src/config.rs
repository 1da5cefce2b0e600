//! Analysis, synthesis and robot-voice parameters.
//!
//! Every section deserializes from JSON with per-field defaults, so a config
//! file only needs to name the values it changes:
//!
//! ```json
//! { "analysis": { "order": 12 }, "robot": { "pitch_period": 100 } }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{LpcError, LpcResult};

/// Number of feedback taps the synthesis filter runs by default.
///
/// Independent of [`AnalysisConfig::order`]; the two only agree when the
/// analysis order is also 10.
pub const SYNTHESIS_TAPS: usize = 10;

/// Framing and model-order parameters for the analysis stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Frame length in samples.
    #[serde(default = "default_frame_length")]
    pub frame_length: usize,
    /// Stride between successive frame starts, in samples.
    #[serde(default = "default_frame_skip")]
    pub frame_skip: usize,
    /// LPC model order (number of predictive taps).
    #[serde(default = "default_order")]
    pub order: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            frame_length: default_frame_length(),
            frame_skip: default_frame_skip(),
            order: default_order(),
        }
    }
}

impl AnalysisConfig {
    /// Creates an analysis config.
    pub fn new(frame_length: usize, frame_skip: usize, order: usize) -> Self {
        Self {
            frame_length,
            frame_skip,
            order,
        }
    }

    /// Checks that the framing parameters describe a usable analysis.
    pub fn validate(&self) -> LpcResult<()> {
        if self.frame_length == 0 {
            return Err(LpcError::invalid_param("frame_length", "must be positive"));
        }
        if self.frame_skip == 0 {
            return Err(LpcError::invalid_param("frame_skip", "must be positive"));
        }
        if self.order >= self.frame_length {
            return Err(LpcError::invalid_param(
                "order",
                format!(
                    "must be smaller than frame_length ({} >= {})",
                    self.order, self.frame_length
                ),
            ));
        }
        Ok(())
    }
}

/// Parameters for the all-pole synthesis filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SynthesisConfig {
    /// Maximum number of feedback taps applied per sample.
    #[serde(default = "default_taps")]
    pub taps: usize,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            taps: default_taps(),
        }
    }
}

/// Parameters for the robot-voice excitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RobotConfig {
    /// Pitch period T0 of the impulse train, in samples.
    #[serde(default = "default_pitch_period")]
    pub pitch_period: usize,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            pitch_period: default_pitch_period(),
        }
    }
}

impl RobotConfig {
    /// Checks that the pitch period is usable.
    pub fn validate(&self) -> LpcResult<()> {
        if self.pitch_period == 0 {
            return Err(LpcError::invalid_param("pitch_period", "must be positive"));
        }
        Ok(())
    }
}

/// Coefficient estimation method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitMethod {
    /// Burg's lattice method.
    #[default]
    Burg,
    /// Autocorrelation method solved with the Levinson-Durbin recursion.
    Autocorrelation,
}

impl FitMethod {
    /// Returns the string representation for reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            FitMethod::Burg => "burg",
            FitMethod::Autocorrelation => "autocorrelation",
        }
    }
}

impl std::fmt::Display for FitMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for FitMethod {
    type Err = LpcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "burg" => Ok(FitMethod::Burg),
            "autocorrelation" | "levinson" => Ok(FitMethod::Autocorrelation),
            other => Err(LpcError::invalid_param(
                "fit_method",
                format!("unknown method '{}'", other),
            )),
        }
    }
}

/// Complete pipeline configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LpcConfig {
    /// Framing and model order.
    #[serde(default)]
    pub analysis: AnalysisConfig,
    /// Synthesis filter.
    #[serde(default)]
    pub synthesis: SynthesisConfig,
    /// Robot-voice excitation.
    #[serde(default)]
    pub robot: RobotConfig,
    /// Coefficient estimation method.
    #[serde(default)]
    pub fit_method: FitMethod,
}

impl LpcConfig {
    /// Parses a config from JSON.
    pub fn from_json_str(json: &str) -> LpcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the config as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> LpcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validates every section.
    pub fn validate(&self) -> LpcResult<()> {
        self.analysis.validate()?;
        self.robot.validate()
    }
}

fn default_frame_length() -> usize {
    200
}

fn default_frame_skip() -> usize {
    100
}

fn default_order() -> usize {
    10
}

fn default_taps() -> usize {
    SYNTHESIS_TAPS
}

fn default_pitch_period() -> usize {
    80
}
