//! Error types for the evaluation pipeline and the oracle adapter.

/// Errors surfaced to the caller of a write or setup operation.
///
/// Oracle problems never appear here: the pipeline recovers from them with
/// the fallback scorer and records them in the diagnostic record instead.
#[derive(Debug, thiserror::Error)]
pub enum JudgeError {
    /// Request rejected before any oracle call; no state was touched.
    #[error("validation failed: {message}")]
    Validation { message: String },

    /// Invalid configuration.
    #[error("configuration error: {message}")]
    Config { message: String },

    /// Persisted state could not be read or written.
    #[error("state error: {message}")]
    State { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl JudgeError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn state(message: impl Into<String>) -> Self {
        Self::State {
            message: message.into(),
        }
    }

    /// Exit code for CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Validation { .. } => 1,
            Self::Config { .. } | Self::State { .. } | Self::Io(_) | Self::Json(_) => 2,
        }
    }
}

/// Failures on the oracle path. All of them are recoverable by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    /// No known capability is present in the oracle namespace.
    #[error("no callable oracle capability found in this runtime")]
    NoOracleAvailable,

    /// The capability rejected the argument set; the adapter retries with fewer.
    #[error("signature mismatch: {0}")]
    SignatureMismatch(String),

    /// The capability raised an error.
    #[error("oracle invocation failed: {0}")]
    Invocation(String),

    /// Output was not a JSON object after extraction.
    #[error("malformed oracle output: {0}")]
    Malformed(String),
}
