//! Per-route permission enforcement.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use gateway_auth::jwt::JwtDecoder;
use gateway_core::AppError;

use crate::error::render_error;
use crate::extractors::request_id::request_id_from_headers;
use crate::state::AppState;

/// Bearer prefix expected in the `Authorization` header.
const BEARER_PREFIX: &str = "Bearer ";

/// State for the permission-gate middleware: the decoder plus the single
/// permission the guarded routes require.
#[derive(Clone)]
pub struct PermissionGate {
    decoder: Arc<JwtDecoder>,
    required: &'static str,
}

impl PermissionGate {
    pub fn new(state: &AppState, required: &'static str) -> Self {
        Self {
            decoder: Arc::clone(&state.jwt_decoder),
            required,
        }
    }
}

/// Middleware body used with `middleware::from_fn_with_state`.
///
/// Missing or malformed header is a 401; a token that fails verification
/// or lacks the permission is a 403. The two 403 causes are deliberately
/// not distinguished.
pub async fn enforce(
    State(gate): State<PermissionGate>,
    request: Request,
    next: Next,
) -> Response {
    let request_id = request_id_from_headers(request.headers());

    let token = request
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix(BEARER_PREFIX));

    let Some(token) = token else {
        return render_error(
            &request_id,
            &AppError::unauthenticated("Unauthorized access").with_code("ME-AN-1"),
        );
    };

    if !gate.decoder.has_permission(token, gate.required) {
        return render_error(
            &request_id,
            &AppError::forbidden("Permission denied").with_code("ME-AN-2"),
        );
    }

    next.run(request).await
}
