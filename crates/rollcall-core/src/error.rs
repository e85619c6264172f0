//! Error types for rollcall-core

use std::path::PathBuf;

use thiserror::Error;

/// Why a selection request could not proceed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// Fewer trimmed, non-empty names than the selection threshold
    #[error(
        "Not enough participants. Please enter at least {required} student names for the VR experience. ({actual} entered)"
    )]
    InsufficientCandidates { required: usize, actual: usize },
}

impl SelectionError {
    /// Number of candidates that were actually available
    pub fn actual(&self) -> usize {
        match self {
            SelectionError::InsufficientCandidates { actual, .. } => *actual,
        }
    }

    /// Minimum number of candidates required
    pub fn required(&self) -> usize {
        match self {
            SelectionError::InsufficientCandidates { required, .. } => *required,
        }
    }
}

/// Failures while loading the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}
