//! Error types for dataset generation

use std::io;
use thiserror::Error;

/// Generation errors
///
/// Everything here is fatal for a run. The one tolerated condition, a
/// dependent record whose contract cannot be resolved, never surfaces as an
/// error: the record is skipped.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// CSV encoding error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML config error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Configuration rejected before the run started
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Weight table could not be turned into a distribution
    #[error("Invalid weight table: {0}")]
    Sampling(#[from] rand::distributions::WeightedError),
}

pub type GenerateResult<T> = Result<T, GenerateError>;
