//! Route definitions for the SSO Gateway HTTP API.
//!
//! Permission gates are attached per method via `route_layer`, so each
//! gate runs only for the handlers that require its permission.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::compression::CompressionLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::middleware::permission::{PermissionGate, enforce};
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let role_read = axum_middleware::from_fn_with_state(
        PermissionGate::new(&state, "role_read"),
        enforce,
    );
    let role_write = axum_middleware::from_fn_with_state(
        PermissionGate::new(&state, "role_write"),
        enforce,
    );
    let user_read = axum_middleware::from_fn_with_state(
        PermissionGate::new(&state, "user_read"),
        enforce,
    );
    let user_write = axum_middleware::from_fn_with_state(
        PermissionGate::new(&state, "user_write"),
        enforce,
    );

    let mut router = Router::new()
        .route("/auth/signin", post(handlers::auth::signin))
        .route(
            "/auth/session",
            get(handlers::auth::session).post(handlers::auth::session),
        )
        .route("/healthz/liveness", get(handlers::health::liveness))
        .route("/healthz/readiness", get(handlers::health::readiness))
        .route(
            "/roles",
            get(handlers::role::list)
                .route_layer(role_read.clone())
                .merge(post(handlers::role::create).route_layer(role_write)),
        )
        .route(
            "/roles/{id}",
            get(handlers::role::get).route_layer(role_read),
        )
        .route(
            "/users/{id}",
            get(handlers::user::get).route_layer(user_read),
        )
        .route(
            "/users",
            post(handlers::user::create).route_layer(user_write),
        )
        .layer(axum_middleware::from_fn(middleware::recovery::catch_panic))
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::cors::build_cors_layer(
            &state.config.server.cors,
        ));

    if state.config.server.compression {
        router = router.layer(CompressionLayer::new());
    }

    router
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(state)
}
