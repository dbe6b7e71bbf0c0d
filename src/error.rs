//! Error types for Trireme.
//!
//! Uses `thiserror` for ergonomic error definitions.

use crate::types::PortError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for scanning operations.
///
/// Individual probes never fail; a port that cannot be reached is simply
/// reported closed. These errors cover the machinery around the probes.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Scan task panicked: {0}")]
    TaskPanicked(String),

    #[error("Result channel closed early: expected {expected} outcomes, received {received}")]
    ResultsTruncated { expected: usize, received: usize },
}

/// Result type alias for scan operations.
pub type ScanResult<T> = Result<T, ScanError>;

/// Errors arising from configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not determine configuration directory")]
    DirectoryNotFound,

    #[error("Failed to read {}: {}", path.display(), reason)]
    ReadFailed { path: PathBuf, reason: String },

    #[error("Invalid configuration: {0}")]
    InvalidFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level error type for CLI execution.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Port(#[from] PortError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
