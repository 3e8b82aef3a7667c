//! Response envelopes shared by every operation.

use serde::Serialize;

use crate::validation::FieldErrors;

/// Error code attached to fabricated validation failures.
pub const VALIDATION_ERROR_CODE: &str = "VALIDATION_ERROR";

/// Uniform success/failure envelope: `{ success, message, data }`.
///
/// Failure instances are fabricated by the pipeline when validation rejects
/// a request; they carry the error code and the per-field messages instead
/// of data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_errors: Option<FieldErrors>,
}

impl<T> Response<T> {
    pub fn succeed(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            error_code: None,
            validation_errors: None,
        }
    }

    /// Success without a payload (link/unlink/delete style operations).
    pub fn succeed_empty(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
            error_code: None,
            validation_errors: None,
        }
    }
}

/// Fabricate a failure value in the handler's declared response shape.
///
/// The pipeline uses this to short-circuit on validation failure without
/// knowing anything about the concrete response type.
pub trait FromRejection: Sized {
    fn rejected(message: String, failures: FieldErrors) -> Self;
}

impl<T> FromRejection for Response<T> {
    fn rejected(message: String, failures: FieldErrors) -> Self {
        Self {
            success: false,
            message,
            data: None,
            error_code: Some(VALIDATION_ERROR_CODE.to_string()),
            validation_errors: Some(failures),
        }
    }
}
