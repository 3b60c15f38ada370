// src/errors.rs

//! Crate-wide error type and result alias.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StagedagError {
    #[error("The file {} does not exist", .0.display())]
    MissingInput(PathBuf),

    #[error("Malformed input in {}: {message}", .path.display())]
    MalformedInput { path: PathBuf, message: String },

    #[error("Inconsistent records: {0}")]
    InconsistentRecords(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Cycle detected in stage graph: {0}")]
    DagCycle(String),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StagedagError {
    pub(crate) fn malformed(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        StagedagError::MalformedInput {
            path: path.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StagedagError>;
