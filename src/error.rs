//! Error types

use std::path::PathBuf;

/// Invalid configuration value
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Maze must have at least one row and one column
    #[error("invalid maze dimension {rows}x{cols}: rows and columns must be at least 1")]
    InvalidDimension { rows: i64, cols: i64 },

    /// Value outside of the closed choice set of a field
    #[error("unknown {field} `{value}`, expected one of: {expected}")]
    UnknownChoice {
        field: &'static str,
        value: String,
        expected: String,
    },
}

/// Failure to read a configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("failed to read configuration file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse configuration file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("configuration file {} is empty", .path.display())]
    Empty { path: PathBuf },

    #[error("configuration file {} is not a mapping or a sequence of mappings", .path.display())]
    Shape { path: PathBuf },
}
