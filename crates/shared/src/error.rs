//! Application-wide error types.
//!
//! The codec itself never fails; these errors only arise where data enters
//! or leaves the workspace (configuration, explicit parsing, CLI I/O).

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded or is inconsistent.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Input is not a well-formed value where one is strictly required.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Value does not fit the requested numeric type.
    #[error("Overflow: {0}")]
    Overflow(String),

    /// Reading or writing failed.
    #[error("I/O error: {0}")]
    Io(String),
}

impl AppError {
    /// Returns the process exit status for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Configuration(_) => 78,
            Self::InvalidInput(_) => 65,
            Self::Overflow(_) => 70,
            Self::Io(_) => 74,
        }
    }

    /// Returns the stable error code for machine-readable output.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::Overflow(_) => "OVERFLOW",
            Self::Io(_) => "IO_ERROR",
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
