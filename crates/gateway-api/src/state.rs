//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use gateway_auth::jwt::JwtDecoder;
use gateway_core::config::AppConfig;
use gateway_service::{AccountService, AuthService, RoleService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped (or pool handles) for cheap cloning.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool, used directly by readiness checks.
    pub db_pool: PgPool,
    /// Session token decoder, used by the permission gate.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Session and sign-in orchestration.
    pub auth_service: Arc<AuthService>,
    /// Role CRUD.
    pub role_service: Arc<RoleService>,
    /// Account CRUD.
    pub account_service: Arc<AccountService>,
}
