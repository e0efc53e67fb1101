//! Error types for the waveform engine

use thiserror::Error;

/// Errors raised by the core library
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// An argument violated a documented precondition
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// No preset is registered under the given name
    #[error("unknown preset '{0}'")]
    UnknownPreset(String),
}

/// Result alias for library operations
pub type Result<T> = std::result::Result<T, Error>;
