//! Role handlers — list, get, create.

use std::str::FromStr;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::Response;
use serde_json::json;

use gateway_core::AppError;
use gateway_core::types::ApiResponse;
use gateway_entity::{NewRole, RoleId};

use crate::error::{render_error, render_ok};
use crate::extractors::RequestId;
use crate::state::AppState;

/// GET /roles
pub async fn list(State(state): State<AppState>, RequestId(request_id): RequestId) -> Response {
    match state.role_service.list().await {
        Ok(roles) => render_ok(
            ApiResponse::new(&request_id)
                .status_code(200)
                .status(true)
                .message("roles listed")
                .payload(json!(roles)),
        ),
        Err(err) => render_error(&request_id, &err),
    }
}

/// GET /roles/{id}
pub async fn get(
    State(state): State<AppState>,
    RequestId(request_id): RequestId,
    Path(id): Path<String>,
) -> Response {
    // The role catalog is a closed enum; an unknown id cannot exist.
    let Ok(role_id) = RoleId::from_str(&id) else {
        return render_error(
            &request_id,
            &AppError::not_found(format!("Role '{id}' not found")).with_code("RS-GT-1"),
        );
    };

    match state.role_service.get(role_id).await {
        Ok(role) => render_ok(
            ApiResponse::new(&request_id)
                .status_code(200)
                .status(true)
                .message("role found")
                .payload(json!(role)),
        ),
        Err(err) => render_error(&request_id, &err),
    }
}

/// POST /roles
pub async fn create(
    State(state): State<AppState>,
    RequestId(request_id): RequestId,
    body: Result<Json<NewRole>, JsonRejection>,
) -> Response {
    let Json(role) = match body {
        Ok(body) => body,
        Err(rejection) => {
            return render_error(
                &request_id,
                &AppError::validation(format!("malformed request body: {rejection}"))
                    .with_code("RS-CR-1"),
            );
        }
    };

    match state.role_service.create(role).await {
        Ok(created) => render_ok(
            ApiResponse::new(&request_id)
                .status_code(201)
                .status(true)
                .message("role created")
                .payload(json!(created)),
        ),
        Err(err) => render_error(&request_id, &err),
    }
}
