//! Role store implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use gateway_auth::ports::RoleStore;
use gateway_core::result::AppResult;
use gateway_core::{AppError, ErrorKind};
use gateway_entity::{NewRole, Role, RoleId};

/// Repository for role lookup and creation.
#[derive(Debug, Clone)]
pub struct RoleRepository {
    pool: PgPool,
}

impl RoleRepository {
    /// Create a new role repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoleStore for RoleRepository {
    async fn find_by_id(&self, id: RoleId) -> AppResult<Option<Role>> {
        sqlx::query_as::<_, Role>("SELECT * FROM roles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find role by id", e)
            })
    }

    async fn list(&self) -> AppResult<Vec<Role>> {
        sqlx::query_as::<_, Role>("SELECT * FROM roles ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list roles", e))
    }

    async fn create(&self, role: &NewRole) -> AppResult<Role> {
        sqlx::query_as::<_, Role>(
            r#"
            INSERT INTO roles (id, description, permissions, status)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(role.id)
        .bind(&role.description)
        .bind(&role.permissions)
        .bind(role.status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("roles_pkey") => {
                AppError::conflict(format!("Role '{}' already exists", role.id))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create role", e),
        })
    }
}
