//! Account handlers — admin lookup and creation.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::Response;
use serde_json::json;

use gateway_core::AppError;
use gateway_core::types::ApiResponse;
use gateway_service::CreateAccountRequest;

use crate::error::{render_error, render_ok};
use crate::extractors::RequestId;
use crate::state::AppState;

/// GET /users/{id}
pub async fn get(
    State(state): State<AppState>,
    RequestId(request_id): RequestId,
    Path(id): Path<i64>,
) -> Response {
    match state.account_service.get(id).await {
        Ok(account) => render_ok(
            ApiResponse::new(&request_id)
                .status_code(200)
                .status(true)
                .message("account found")
                .payload(json!(account)),
        ),
        Err(err) => render_error(&request_id, &err),
    }
}

/// POST /users
pub async fn create(
    State(state): State<AppState>,
    RequestId(request_id): RequestId,
    body: Result<Json<CreateAccountRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => {
            return render_error(
                &request_id,
                &AppError::validation(format!("malformed request body: {rejection}"))
                    .with_code("US-CR-1"),
            );
        }
    };

    match state.account_service.create(request).await {
        Ok(created) => render_ok(
            ApiResponse::new(&request_id)
                .status_code(201)
                .status(true)
                .message("account created")
                .payload(json!(created)),
        ),
        Err(err) => render_error(&request_id, &err),
    }
}
