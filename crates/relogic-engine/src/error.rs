//! Error types for the reasoning engine.
//!
//! Logical verdicts (invalid arguments, failed proofs) are never errors; they are
//! reported as data in [`ValidationResult`](crate::ValidationResult) and
//! [`ArgumentValidation`](crate::ArgumentValidation).

use std::path::PathBuf;

use relogic_ir::IrError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Unknown logic system '{name}' (expected one of B, T, E, R or classical)")]
    UnknownSystem { name: String },
    #[error("Proof search exceeded its budget of {limit} steps")]
    StepLimitExceeded { limit: usize },
    #[error("Invalid model: {reason}")]
    InvalidModel { reason: String },
    #[error(transparent)]
    Ir(#[from] IrError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

pub type EngineResult<T> = Result<T, EngineError>;
