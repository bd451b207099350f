//! Core error types used across the bill store

use thiserror::Error;

/// Core error type for the domain layer
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Unknown bill category: '{0}'")]
    UnknownCategory(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    pub fn unknown_category(name: impl Into<String>) -> Self {
        CoreError::UnknownCategory(name.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        CoreError::Validation(message.into())
    }
}
