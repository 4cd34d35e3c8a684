//! Maps domain `AppError` to HTTP envelope responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use gateway_core::types::{ApiError, ApiResponse};
use gateway_core::{AppError, ErrorKind};

/// HTTP status for an error kind.
pub fn http_status(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::Unauthenticated => StatusCode::UNAUTHORIZED,
        ErrorKind::Forbidden => StatusCode::FORBIDDEN,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::Database
        | ErrorKind::Configuration
        | ErrorKind::Serialization
        | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Builds the failure envelope for an error.
///
/// Internal kinds log the real message and surface a generic one; the
/// step code (or the kind name when no code is attached) always passes
/// through so callers can correlate with logs.
pub fn error_envelope(request_id: &str, err: &AppError) -> ApiResponse {
    let status = http_status(err.kind);

    let message = if err.kind.is_internal() {
        tracing::error!(
            request_id,
            kind = %err.kind,
            code = err.code.as_deref(),
            error = %err.message,
            "internal error"
        );
        "Internal server error".to_string()
    } else {
        err.message.clone()
    };

    let code = err
        .code
        .clone()
        .unwrap_or_else(|| err.kind.to_string());

    ApiResponse::new(request_id)
        .status_code(status.as_u16())
        .status(false)
        .message(message.clone())
        .error(ApiError {
            code,
            message,
            detail: None,
        })
}

/// Renders an error as a complete HTTP response.
pub fn render_error(request_id: &str, err: &AppError) -> Response {
    let envelope = error_envelope(request_id, err);
    let status = StatusCode::from_u16(envelope.status_code)
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(envelope)).into_response()
}

/// Renders a success envelope with the right status line.
pub fn render_ok(envelope: ApiResponse) -> Response {
    let status =
        StatusCode::from_u16(envelope.status_code).unwrap_or(StatusCode::OK);
    (status, Json(envelope)).into_response()
}
