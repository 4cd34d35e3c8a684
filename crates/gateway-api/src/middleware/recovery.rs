//! Per-request panic boundary.

use std::panic::AssertUnwindSafe;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use futures::FutureExt;

use gateway_core::AppError;

use crate::error::render_error;
use crate::extractors::request_id::request_id_from_headers;

/// Catches panics from downstream handlers and converts them into a
/// generic 500 envelope so one request can never take the process down.
pub async fn catch_panic(request: Request, next: Next) -> Response {
    let request_id = request_id_from_headers(request.headers());
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    match AssertUnwindSafe(next.run(request)).catch_unwind().await {
        Ok(response) => response,
        Err(panic) => {
            let detail = panic_message(&panic);
            tracing::error!(request_id, %method, path, panic = %detail, "handler panicked");
            render_error(
                &request_id,
                &AppError::internal("Internal server error").with_code("ME-PR-1"),
            )
        }
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
