//! Error types for the step wizard

use crate::config::ConfigError;
use thiserror::Error;

/// Result type alias for step wizard operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the step wizard
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
