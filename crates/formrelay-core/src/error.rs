//! Error types module
//!
//! Every failure the relay can hit while handling one submission is a [`RelayError`].
//! Variants describe their own HTTP status, machine-readable code and log level so the
//! HTTP layer can render them uniformly.

use std::io;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Expected errors like malformed client input
    Debug,
    /// Client errors worth noticing
    Warn,
    /// Unexpected failures
    Error,
}

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Too many files: at most {max} images are accepted")]
    TooManyFiles { max: usize },

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Email provider request failed: {0}")]
    Provider(String),

    #[error("Email provider returned an unreadable response: {0}")]
    ProviderResponse(String),
}

impl RelayError {
    /// HTTP status code to return
    pub fn http_status_code(&self) -> u16 {
        match self {
            RelayError::InvalidInput(_) | RelayError::TooManyFiles { .. } => 400,
            RelayError::PayloadTooLarge(_) => 413,
            RelayError::Io(_) | RelayError::Provider(_) | RelayError::ProviderResponse(_) => 500,
        }
    }

    /// Machine-readable error code
    pub fn error_code(&self) -> &'static str {
        match self {
            RelayError::InvalidInput(_) => "INVALID_INPUT",
            RelayError::TooManyFiles { .. } => "TOO_MANY_FILES",
            RelayError::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            RelayError::Io(_) => "IO_ERROR",
            RelayError::Provider(_) => "PROVIDER_UNREACHABLE",
            RelayError::ProviderResponse(_) => "PROVIDER_BAD_RESPONSE",
        }
    }

    pub fn log_level(&self) -> LogLevel {
        match self {
            RelayError::InvalidInput(_) => LogLevel::Debug,
            RelayError::TooManyFiles { .. } | RelayError::PayloadTooLarge(_) => LogLevel::Warn,
            _ => LogLevel::Error,
        }
    }
}
