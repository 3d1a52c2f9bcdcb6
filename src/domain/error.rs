use std::io;

use thiserror::Error;

/// Library-wide error type for hook operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Document could not be decoded.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// Payload was decoded but rejected by the configuration schema.
    #[error("Invalid {component} configuration: {details}")]
    InvalidConfig { component: String, details: String },

    /// snapctl execution failed.
    #[error("snapctl error running '{command}': {details}")]
    SnapCommand { command: String, details: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::ParseError { .. } | AppError::InvalidConfig { .. } => {
                io::ErrorKind::InvalidInput
            }
            AppError::Configuration(_) => io::ErrorKind::NotFound,
            AppError::SnapCommand { .. } => io::ErrorKind::Other,
        }
    }
}
