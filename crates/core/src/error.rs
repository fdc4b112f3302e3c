//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Only deterministic business failures live here. Nothing in the ledger does IO,
/// so there is no infrastructure variant.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A referenced id does not exist in the relevant collection.
    #[error("not found: {0}")]
    NotFound(String),

    /// An operation precondition was violated (e.g. purchasing an out-of-stock product).
    #[error("invalid state: {0}")]
    InvalidState(String),
}

impl DomainError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    /// Human-readable message without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            DomainError::NotFound(msg) | DomainError::InvalidState(msg) => msg,
        }
    }
}
