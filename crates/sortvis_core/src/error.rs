//! Core error types

use thiserror::Error;

/// Errors surfaced synchronously to the caller of a registry or renderer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// An identifier was registered twice
    #[error("An algorithm with the given identifier already exists: {0}")]
    DuplicateRegistration(String),

    /// An identifier was used without being registered
    #[error("No algorithm with the given identifier exists: {0}")]
    UnknownIdentifier(String),

    /// A renderer was attached to a host target of the wrong kind
    #[error("Invalid host element: {0}")]
    InvalidHostElement(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
