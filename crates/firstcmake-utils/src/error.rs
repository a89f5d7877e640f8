//! Error types for firstcmake-utils

use thiserror::Error;

/// Result type alias for showcase operations
pub type Result<T> = std::result::Result<T, ShowcaseError>;

/// Main error type for showcase operations
#[derive(Error, Debug)]
pub enum ShowcaseError {
    /// Reading stdin or writing stdout failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be loaded or is invalid
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("IO error reading {path}: {message}")]
    Io { path: String, message: String },

    /// Config text could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Config could not be written out
    #[error("Serialize error: {0}")]
    Serialize(String),

    /// A value failed validation
    #[error("Invalid value: {0}")]
    Invalid(String),
}
