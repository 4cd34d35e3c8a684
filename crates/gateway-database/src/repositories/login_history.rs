//! Login-history store implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use gateway_auth::ports::LoginHistoryStore;
use gateway_core::result::AppResult;
use gateway_core::{AppError, ErrorKind};
use gateway_entity::{LoginAttempt, NewLoginAttempt};

/// Repository for the append-only login-attempt ledger.
#[derive(Debug, Clone)]
pub struct LoginHistoryRepository {
    pool: PgPool,
}

impl LoginHistoryRepository {
    /// Create a new login-history repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LoginHistoryStore for LoginHistoryRepository {
    async fn append(&self, attempt: &NewLoginAttempt) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO login_history (account_id, outcome, token, reason, permissions)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(attempt.account_id)
        .bind(attempt.outcome)
        .bind(&attempt.token)
        .bind(&attempt.reason)
        .bind(&attempt.permissions)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to append login attempt", e)
        })?;
        Ok(())
    }

    async fn recent_by_account(
        &self,
        account_id: i64,
        since: DateTime<Utc>,
    ) -> AppResult<Vec<LoginAttempt>> {
        sqlx::query_as::<_, LoginAttempt>(
            r#"
            SELECT * FROM login_history
            WHERE account_id = $1 AND login_at >= $2
            ORDER BY login_at DESC, id DESC
            "#,
        )
        .bind(account_id)
        .bind(since)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to read login history", e)
        })
    }
}
