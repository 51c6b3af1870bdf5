//! Cross-cutting error types for JobShield.
//!
//! Domain-specific errors (e.g., `DatabaseError`, `AnalysisError`) are defined
//! in their respective crates. They converge into `ServiceError` in
//! `shield-server`, which owns the mapping to HTTP status codes.

use thiserror::Error;

/// Errors that can be raised by any JobShield crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    /// The requester is authenticated but does not own the entity.
    #[error("Unauthorized")]
    Unauthorized,

    /// A request field failed validation.
    #[error("{message}")]
    Validation { field: String, message: String },

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    #[must_use]
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn not_found(entity_type: &str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    }
}
