//! Health check handlers.

use axum::extract::State;
use axum::response::Response;
use serde_json::json;

use gateway_core::types::ApiResponse;

use crate::dto::response::{HealthResponse, ReadinessResponse};
use crate::error::render_ok;
use crate::extractors::RequestId;
use crate::state::AppState;

/// GET /healthz/liveness
pub async fn liveness(RequestId(request_id): RequestId) -> Response {
    render_ok(
        ApiResponse::new(&request_id)
            .status_code(200)
            .status(true)
            .message("alive")
            .payload(json!(HealthResponse {
                status: "ok".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            })),
    )
}

/// GET /healthz/readiness
pub async fn readiness(
    State(state): State<AppState>,
    RequestId(request_id): RequestId,
) -> Response {
    let database_ok = sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&state.db_pool)
        .await
        .is_ok();

    let payload = ReadinessResponse {
        status: if database_ok { "ok" } else { "degraded" }.to_string(),
        database: if database_ok {
            "connected"
        } else {
            "unreachable"
        }
        .to_string(),
    };

    let status_code = if database_ok { 200 } else { 503 };
    render_ok(
        ApiResponse::new(&request_id)
            .status_code(status_code)
            .status(database_ok)
            .message(if database_ok { "ready" } else { "not ready" })
            .payload(json!(payload)),
    )
}
