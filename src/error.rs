//! Error types

use std::path::PathBuf;
use thiserror::Error;

/// Application result type
pub type Result<T> = std::result::Result<T, Error>;

/// Rejected configuration values
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be at least 1, got {value}")]
    NonPositiveSize { name: &'static str, value: i64 },

    #[error("minSize ({min}) is larger than maxSize ({max})")]
    SizeRange { min: usize, max: usize },

    #[error("onProbability must be within [0, 1], got {0}")]
    Probability(f64),

    #[error("stepIntervalSeconds must be a finite, non-negative number, got {0}")]
    Interval(f64),

    #[error("a {width}x{height} board exceeds the limit of {limit} cells")]
    BoardTooLarge { width: usize, height: usize, limit: usize },

    #[error("width and height must be given together")]
    PartialDimensions,
}

/// Malformed grid input
#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },

    #[error("expected {expected} cell values, found {found}")]
    CellCount { expected: usize, found: usize },

    #[error("a {width}x{height} board has more cells than can be addressed")]
    TooLarge { width: usize, height: usize },

    #[error("invalid cell character '{ch}' on line {line}")]
    InvalidChar { line: usize, ch: char },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid pattern: {0}")]
    Grid(#[from] GridError),

    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },

    #[error("failed to parse settings file {path}: {source}")]
    Settings { path: PathBuf, source: toml::de::Error },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
