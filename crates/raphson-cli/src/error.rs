//! CLI error types.

use std::path::PathBuf;

use raphson_math::MathError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file could not be read.
    #[error("Cannot read config file {path}: {source}")]
    ConfigRead {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for a run.
    #[error("Invalid config file {path}: {source}")]
    ConfigParse {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying parse failure.
        source: toml::de::Error,
    },

    /// Run parameters rejected before iterating.
    #[error("Invalid parameters: {0}")]
    Parameters(#[from] MathError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialization error.
    #[error("Serialization error: {0}")]
    Csv(#[from] csv::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
