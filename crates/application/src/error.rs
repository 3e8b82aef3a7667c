//! Application error taxonomy.

use thiserror::Error;

use forgecrm_core::DomainError;

use crate::validation::FieldErrors;

/// Errors that escape a handler.
///
/// Validation rejections normally never reach this type (the pipeline
/// fabricates a failure response first); the `Validation` variant exists for
/// handlers that discover field-level problems only mid-execution.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Field-level validation failure raised by a handler.
    #[error("one or more validation errors occurred")]
    Validation(FieldErrors),

    /// A referenced resource does not exist.
    #[error("{0}")]
    NotFound(String),

    /// A domain invariant or domain validation rejected the operation.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Caller is not allowed to perform the operation.
    #[error("{0}")]
    Unauthorized(String),

    /// Anything unexpected; translates to a 500.
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}
