//! Application builder — wires state into the router and runs the server.

use std::future::{Future, IntoFuture};
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;

use gateway_auth::jwt::{JwtDecoder, JwtEncoder};
use gateway_auth::lockout::LockoutTracker;
use gateway_auth::password::{PasswordHasher, PasswordPolicy};
use gateway_auth::ports::{AccountStore, LoginHistoryStore, RoleStore};
use gateway_core::config::AppConfig;
use gateway_core::{AppError, AppResult};
use gateway_database::repositories::{
    AccountRepository, LoginHistoryRepository, RoleRepository,
};
use gateway_service::{AccountService, AuthService, RoleService};

use crate::router::build_router;
use crate::state::AppState;

/// Builds the full application state and router from a config and pool.
pub fn build_app(config: Arc<AppConfig>, db_pool: PgPool) -> Router {
    // ── Step 1: Repositories ─────────────────────────────────────
    let accounts: Arc<dyn AccountStore> = Arc::new(AccountRepository::new(db_pool.clone()));
    let roles: Arc<dyn RoleStore> = Arc::new(RoleRepository::new(db_pool.clone()));
    let history: Arc<dyn LoginHistoryStore> =
        Arc::new(LoginHistoryRepository::new(db_pool.clone()));

    // ── Step 2: Auth engine ──────────────────────────────────────
    let hasher = Arc::new(PasswordHasher::new());
    let encoder = Arc::new(JwtEncoder::new(&config.auth));
    let decoder = Arc::new(JwtDecoder::new(&config.auth));
    let lockout = LockoutTracker::new(&config.auth, Arc::clone(&history), Arc::clone(&accounts));

    // ── Step 3: Services ─────────────────────────────────────────
    let auth_service = Arc::new(AuthService::new(
        &config.auth,
        Arc::clone(&accounts),
        Arc::clone(&roles),
        Arc::clone(&history),
        lockout,
        Arc::clone(&hasher),
        Arc::clone(&encoder),
    ));
    let role_service = Arc::new(RoleService::new(Arc::clone(&roles)));
    let account_service = Arc::new(AccountService::new(
        Arc::clone(&accounts),
        Arc::clone(&hasher),
        PasswordPolicy::new(
            config.auth.password_min_length,
            config.auth.password_max_length,
        ),
    ));

    // ── Step 4: Router ───────────────────────────────────────────
    let state = AppState {
        config,
        db_pool,
        jwt_decoder: decoder,
        auth_service,
        role_service,
        account_service,
    };

    build_router(state)
}

/// Binds the listener and serves until a shutdown signal arrives.
///
/// After the signal, in-flight requests get `shutdown_grace_seconds` to
/// finish before the server is abandoned.
pub async fn serve(config: Arc<AppConfig>, db_pool: PgPool) -> AppResult<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!(%addr, "SSO Gateway listening");

    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let (signal_tx, signal_rx) = tokio::sync::watch::channel(false);

    let app = build_app(config, db_pool);
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        let _ = signal_tx.send(true);
    });

    bounded_shutdown(server.into_future(), signal_rx, grace).await
}

/// Runs the server future, abandoning it `grace` after the shutdown
/// signal fires.
async fn bounded_shutdown(
    server: impl Future<Output = std::io::Result<()>>,
    mut signal_rx: tokio::sync::watch::Receiver<bool>,
    grace: Duration,
) -> AppResult<()> {
    tokio::pin!(server);

    let deadline = async {
        // Resolves only after the signal has fired and the grace elapsed.
        let _ = signal_rx.changed().await;
        tokio::time::sleep(grace).await;
    };

    tokio::select! {
        result = &mut server => {
            result.map_err(|e| AppError::internal(format!("Server error: {e}")))
        }
        _ = deadline => {
            tracing::warn!(
                grace_seconds = grace.as_secs(),
                "graceful shutdown grace elapsed, dropping in-flight requests"
            );
            Ok(())
        }
    }
}

/// Resolves on ctrl-c or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
