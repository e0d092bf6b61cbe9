//! Unified error type definition

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::form::FieldErrors;

/// Failure reported by the remote accounts service.
///
/// The remote API does not expose structured error codes, so every failed
/// call collapses into this one type carrying the transport's message.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message}")]
pub struct RemoteError {
    /// Human-readable failure description
    pub message: String,
}

impl RemoteError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Form input rejected (field level)
    #[error("{0}")]
    Validation(FieldErrors),

    /// Submit was requested while no add/edit modal is open
    #[error("No account modal is open")]
    NoOpenModal,

    /// Validation error (wiring / builder input)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Configuration could not be read or parsed
    #[error("Config error: {0}")]
    ConfigError(String),
}

impl CoreError {
    /// Whether it is expected behavior (user input, stale UI action, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Validation(_) | Self::NoOpenModal | Self::ValidationError(_) => true,
            Self::ConfigError(_) => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
