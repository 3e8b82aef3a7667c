//! Problem-details error responses (RFC 9457 shape).

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use serde_json::json;
use uuid::Uuid;

use forgecrm_application::AppError;
use forgecrm_core::DomainError;

const PROBLEM_CONTENT_TYPE: &str = "application/problem+json";
const ERROR_TYPE_BASE: &str = "https://api.example.com/errors";

/// Translate a pipeline error into a problem-details response.
///
/// Every response carries a fresh `traceId` so a client report can be joined
/// with the server logs.
pub fn app_error_to_response(err: AppError) -> axum::response::Response {
    let (status, code, title) = classify(&err);
    let detail = err.to_string();

    let mut body = json!({
        "type": format!("{ERROR_TYPE_BASE}/{}", code.to_lowercase().replace('_', "-")),
        "title": title,
        "status": status.as_u16(),
        "detail": detail,
        "instance": format!("/errors/{}", Uuid::now_v7()),
        "errorCode": code,
        "traceId": Uuid::now_v7().to_string(),
    });
    if let AppError::Validation(failures) = &err {
        if let Ok(value) = serde_json::to_value(failures) {
            body["validationErrors"] = value;
        }
    }

    problem_response(status, body)
}

fn classify(err: &AppError) -> (StatusCode, &'static str, &'static str) {
    match err {
        AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", "Validation Error"),
        AppError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND", "Resource Not Found"),
        AppError::Domain(domain) => match domain {
            DomainError::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND", "Resource Not Found"),
            DomainError::Unauthorized => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", "Unauthorized"),
            DomainError::Validation(_) | DomainError::InvariantViolation(_) | DomainError::InvalidId(_) => {
                (StatusCode::BAD_REQUEST, "DOMAIN_VALIDATION_ERROR", "Domain Validation Error")
            }
        },
        AppError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", "Unauthorized"),
        AppError::Unexpected(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "Internal Server Error",
        ),
    }
}

/// Ad hoc bad-request problem (route-level checks like path/body mismatch).
pub fn bad_request(detail: impl Into<String>) -> axum::response::Response {
    let body = json!({
        "type": format!("{ERROR_TYPE_BASE}/bad-request"),
        "title": "Bad Request",
        "status": 400,
        "detail": detail.into(),
        "instance": format!("/errors/{}", Uuid::now_v7()),
        "errorCode": "BAD_REQUEST",
        "traceId": Uuid::now_v7().to_string(),
    });
    problem_response(StatusCode::BAD_REQUEST, body)
}

fn problem_response(status: StatusCode, body: serde_json::Value) -> axum::response::Response {
    (
        status,
        [(header::CONTENT_TYPE, PROBLEM_CONTENT_TYPE)],
        axum::Json(body),
    )
        .into_response()
}
