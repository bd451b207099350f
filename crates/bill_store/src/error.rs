//! Store error types
//!
//! Everything surfaces to the immediate caller; nothing is retried, logged in
//! place of propagation, or swallowed. A lookup that simply finds nothing is
//! not an error - those return `Ok(None)` or an empty vec.

use thiserror::Error;

use bill_core::CoreError;

/// Errors that can occur during bill store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// Required configuration missing or unusable at startup
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Caller supplied a malformed document identifier
    #[error("Invalid bill identifier '{0}': not a valid ObjectId")]
    InvalidIdentifier(String),

    /// Domain-level error (e.g. unknown category name)
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Driver-level failure: unreachable server, timed-out query, rejected
    /// command. Propagated unmodified; no retry or backoff is performed.
    #[error("Database driver error: {0}")]
    Driver(#[from] mongodb::error::Error),

    /// A stored document did not match the expected shape
    #[error("Stored document could not be decoded: {0}")]
    Decode(#[from] bson::de::Error),

    /// A document could not be converted to BSON for writing
    #[error("Document could not be encoded: {0}")]
    Encode(#[from] bson::ser::Error),
}

impl StoreError {
    /// Creates a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        StoreError::Configuration(message.into())
    }

    /// Creates an invalid-identifier error for the given input
    pub fn invalid_identifier(id: impl Into<String>) -> Self {
        StoreError::InvalidIdentifier(id.into())
    }

    /// Checks if this error is a startup configuration problem
    pub fn is_configuration(&self) -> bool {
        matches!(self, StoreError::Configuration(_))
    }

    /// Checks if this error was caused by a malformed identifier
    pub fn is_invalid_identifier(&self) -> bool {
        matches!(self, StoreError::InvalidIdentifier(_))
    }

    /// Checks if this error indicates the database was unreachable
    pub fn is_connectivity(&self) -> bool {
        match self {
            StoreError::Driver(e) => matches!(
                e.kind.as_ref(),
                mongodb::error::ErrorKind::Io(_)
                    | mongodb::error::ErrorKind::ServerSelection { .. }
                    | mongodb::error::ErrorKind::ConnectionPoolCleared { .. }
            ),
            _ => false,
        }
    }
}
