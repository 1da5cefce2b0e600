//! Error types for LPC analysis and synthesis.

use thiserror::Error;

/// Result type for LPC operations.
pub type LpcResult<T> = Result<T, LpcError>;

/// Errors that can occur while analysing or resynthesising speech.
#[derive(Debug, Error)]
pub enum LpcError {
    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// Two arrays that must agree on a dimension do not.
    #[error("dimension mismatch in {what}: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Which dimension disagreed.
        what: String,
        /// Expected size.
        expected: usize,
        /// Actual size.
        found: usize,
    },

    /// Coefficient sets are too short for the synthesis filter.
    #[error("coefficient sets need at least {required} taps, found {found}")]
    InsufficientTaps {
        /// Required number of coefficients per set (taps + 1).
        required: usize,
        /// Coefficients actually present per set.
        found: usize,
    },

    /// Coefficient estimation failed.
    #[error("coefficient fit failed: {message}")]
    Fit {
        /// Error message.
        message: String,
    },

    /// Audio that this crate does not handle.
    #[error("unsupported audio format: {message}")]
    UnsupportedFormat {
        /// Error message.
        message: String,
    },

    /// WAV decode/encode error.
    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be parsed or serialized.
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl LpcError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates a dimension mismatch error.
    pub fn mismatch(what: impl Into<String>, expected: usize, found: usize) -> Self {
        Self::DimensionMismatch {
            what: what.into(),
            expected,
            found,
        }
    }

    /// Creates a coefficient fit error.
    pub fn fit(message: impl Into<String>) -> Self {
        Self::Fit {
            message: message.into(),
        }
    }

    /// Creates an unsupported format error.
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            message: message.into(),
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            LpcError::InvalidParameter { .. } => "LPC_001",
            LpcError::DimensionMismatch { .. } => "LPC_002",
            LpcError::InsufficientTaps { .. } => "LPC_003",
            LpcError::Fit { .. } => "LPC_004",
            LpcError::UnsupportedFormat { .. } => "LPC_005",
            LpcError::Wav(_) => "LPC_006",
            LpcError::Io(_) => "LPC_007",
            LpcError::Config(_) => "LPC_008",
        }
    }

    /// Broad error category for reporting.
    pub fn category(&self) -> &'static str {
        match self {
            LpcError::Wav(_) | LpcError::Io(_) | LpcError::UnsupportedFormat { .. } => "audio-io",
            LpcError::Config(_) => "config",
            _ => "lpc",
        }
    }
}
