use thiserror::Error;

use crate::domain::ValidationError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required environment variable: {name}")]
    MissingVar { name: &'static str },

    #[error("invalid value for {name}: {reason}")]
    InvalidValue { name: &'static str, reason: String },

    #[error("failed to initialize log file: {0}")]
    Logging(String),
}

/// Submission-related errors with structured variants.
///
/// `Rejected` and `AuthFailed` are exchange-side rejections of an invalid
/// request; `Network` covers transport and connectivity failures. Neither
/// category is retried.
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    #[error("order rejected by exchange (code {code}): {message}")]
    Rejected { code: i64, message: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected exchange response: {0}")]
    InvalidResponse(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Execution(#[from] ExecutionError),
}

pub type Result<T> = std::result::Result<T, Error>;
