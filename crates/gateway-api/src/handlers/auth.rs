//! Auth handlers — anonymous session grant and credential sign-in.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::Response;
use serde_json::json;

use gateway_core::AppError;
use gateway_core::types::ApiResponse;
use gateway_service::SigninRequest;

use crate::error::{render_error, render_ok};
use crate::extractors::RequestId;
use crate::state::AppState;

/// GET|POST /auth/session
pub async fn session(
    State(state): State<AppState>,
    RequestId(request_id): RequestId,
) -> Response {
    match state.auth_service.session().await {
        Ok(grant) => render_ok(
            ApiResponse::new(&request_id)
                .status_code(200)
                .status(true)
                .message("session issued")
                .token(grant.token)
                .permissions(grant.permissions),
        ),
        Err(err) => render_error(&request_id, &err),
    }
}

/// POST /auth/signin
///
/// Body decode failure is reported in-band rather than through axum's
/// default rejection so the envelope stays uniform.
pub async fn signin(
    State(state): State<AppState>,
    RequestId(request_id): RequestId,
    body: Result<Json<SigninRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => {
            return render_error(
                &request_id,
                &AppError::validation(format!("malformed request body: {rejection}"))
                    .with_code("AH-SIN-1"),
            );
        }
    };

    match state.auth_service.signin(request).await {
        Ok(grant) => render_ok(
            ApiResponse::new(&request_id)
                .status_code(200)
                .status(true)
                .message("signin successful")
                .token(grant.token)
                .permissions(grant.permissions)
                .payload(json!(grant.account)),
        ),
        Err(err) => render_error(&request_id, &err),
    }
}
