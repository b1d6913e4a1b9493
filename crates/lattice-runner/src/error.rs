//! Error types for the `lattice-runner` binary.

use lattice_engine::{EngineError, PatternError};

use crate::config::ConfigError;

/// Errors that can occur while setting up or finishing a run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration could not be loaded.
    #[error("configuration error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: ConfigError,
    },

    /// The initial pattern could not be loaded.
    #[error("pattern error: {source}")]
    Pattern {
        /// The underlying pattern error.
        #[from]
        source: PatternError,
    },

    /// The engine rejected the input or failed during the run.
    #[error("engine error: {source}")]
    Engine {
        /// The underlying engine error.
        #[from]
        source: EngineError,
    },

    /// No pattern source was configured.
    #[error("no pattern configured: set pattern.path or pattern.random")]
    MissingPattern,

    /// The frames directory could not be created.
    #[error("failed to create frames directory: {source}")]
    FramesDir {
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The run report could not be written.
    #[error("failed to write run report: {message}")]
    Report {
        /// Explanation of the failure.
        message: String,
    },
}
