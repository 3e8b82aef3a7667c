use core::str::FromStr;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use forgecrm_application::{AppError, Response};
use forgecrm_core::DomainError;

use crate::app::errors;

/// Parse a path segment into a typed id; a malformed UUID becomes the same
/// problem-details 400 as any other domain validation failure.
pub fn parse_path_id<T>(raw: &str) -> Result<T, axum::response::Response>
where
    T: FromStr<Err = DomainError>,
{
    raw.parse()
        .map_err(|e: DomainError| errors::app_error_to_response(AppError::from(e)))
}

/// Map a pipeline result onto HTTP: the envelope passes through on success,
/// a fabricated validation failure becomes a 400 with the same envelope, and
/// errors become problem details.
pub fn respond<T: Serialize>(
    result: Result<Response<T>, AppError>,
    success_status: StatusCode,
) -> axum::response::Response {
    match result {
        Ok(resp) if resp.success => (success_status, Json(resp)).into_response(),
        Ok(resp) => (StatusCode::BAD_REQUEST, Json(resp)).into_response(),
        Err(err) => errors::app_error_to_response(err),
    }
}

/// Like `respond`, but a successful result yields an empty 204.
pub fn respond_no_content(result: Result<Response<()>, AppError>) -> axum::response::Response {
    match result {
        Ok(resp) if resp.success => StatusCode::NO_CONTENT.into_response(),
        Ok(resp) => (StatusCode::BAD_REQUEST, Json(resp)).into_response(),
        Err(err) => errors::app_error_to_response(err),
    }
}
