//! End-to-end analysis, reconstruction and robot-voice processing.

use tracing::{debug, warn};

use crate::analysis::{analyze, Analysis};
use crate::config::LpcConfig;
use crate::error::LpcResult;
use crate::fitter::CoefficientFitter;
use crate::robot::robot_voice;
use crate::synthesis::LpcSynthesizer;

/// Output of [`LpcPipeline::robotize`].
#[derive(Debug, Clone)]
pub struct RobotOutput {
    /// Analysis of the input waveform.
    pub analysis: Analysis,
    /// RMS gain of each residual frame.
    pub gains: Vec<f64>,
    /// Impulse-train excitation fed to the synthesizer.
    pub excitation: Vec<f64>,
    /// Synthesised robot voice, `frames * frame_skip` samples long.
    pub waveform: Vec<f64>,
}

/// Configured chain of framer, fitter, synthesizer and robot-voice generator.
pub struct LpcPipeline {
    config: LpcConfig,
    fitter: Box<dyn CoefficientFitter>,
    synthesizer: LpcSynthesizer,
}

impl std::fmt::Debug for LpcPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LpcPipeline")
            .field("config", &self.config)
            .field("fitter", &self.fitter.name())
            .finish()
    }
}

impl LpcPipeline {
    /// Creates a pipeline using the estimator named in `config`.
    pub fn new(config: LpcConfig) -> LpcResult<Self> {
        let fitter = config.fit_method.fitter();
        Self::with_fitter(config, fitter)
    }

    /// Creates a pipeline with a caller-supplied estimator.
    ///
    /// `config.fit_method` is ignored.
    pub fn with_fitter(config: LpcConfig, fitter: Box<dyn CoefficientFitter>) -> LpcResult<Self> {
        config.validate()?;
        if config.synthesis.taps != config.analysis.order {
            warn!(
                taps = config.synthesis.taps,
                order = config.analysis.order,
                "synthesis taps differ from analysis order; resynthesis will not invert the residual"
            );
        }
        Ok(Self {
            synthesizer: LpcSynthesizer::from_config(&config.synthesis),
            config,
            fitter,
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &LpcConfig {
        &self.config
    }

    /// Name of the active estimator.
    pub fn fitter_name(&self) -> &'static str {
        self.fitter.name()
    }

    /// Frames the waveform, fits coefficients and computes the residual.
    pub fn analyze(&self, waveform: &[f64]) -> LpcResult<Analysis> {
        analyze(waveform, &self.config.analysis, self.fitter.as_ref())
    }

    /// Resynthesises `waveform` from its own residual and coefficients.
    ///
    /// Output sample `n` corresponds to input sample
    /// `n + frame_length - frame_skip` (each frame contributes only its valid
    /// tail).
    pub fn reconstruct(&self, waveform: &[f64]) -> LpcResult<Vec<f64>> {
        let analysis = self.analyze(waveform)?;
        let frame_skip = self.config.analysis.frame_skip;
        let excitation = analysis.excitation.concatenate_tails(frame_skip);
        self.synthesizer
            .synthesize(&excitation, &analysis.coefficients, frame_skip)
    }

    /// Replaces the residual with a fixed-pitch impulse train and resynthesises.
    pub fn robotize(&self, waveform: &[f64]) -> LpcResult<RobotOutput> {
        let analysis = self.analyze(waveform)?;
        let frame_skip = self.config.analysis.frame_skip;
        let voice = robot_voice(&analysis.excitation, &self.config.robot, frame_skip)?;
        let output = self
            .synthesizer
            .synthesize(&voice.excitation, &analysis.coefficients, frame_skip)?;

        debug!(
            frames = analysis.num_frames(),
            samples = output.len(),
            "robot voice synthesised"
        );

        Ok(RobotOutput {
            analysis,
            gains: voice.gains,
            excitation: voice.excitation,
            waveform: output,
        })
    }
}
