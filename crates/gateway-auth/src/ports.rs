//! Capability traits for the backing stores.
//!
//! The engine depends only on these interfaces; `gateway-database`
//! provides one concrete adapter per backing technology.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use gateway_core::AppResult;
use gateway_entity::{Account, LoginAttempt, NewAccount, NewLoginAttempt, NewRole, Role, RoleId};

/// Read/write contract for account records.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Find an account by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>>;

    /// Find an account by primary key.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Account>>;

    /// Extend the account's lock until the given time.
    async fn set_lock_until(&self, id: i64, until: DateTime<Utc>) -> AppResult<()>;

    /// Create a new account. Duplicate email maps to `ErrorKind::Conflict`.
    async fn create(&self, account: &NewAccount) -> AppResult<Account>;
}

/// Read contract for role records.
#[async_trait]
pub trait RoleStore: Send + Sync {
    /// Find a role by identifier.
    async fn find_by_id(&self, id: RoleId) -> AppResult<Option<Role>>;

    /// List all roles.
    async fn list(&self) -> AppResult<Vec<Role>>;

    /// Create a new role. Duplicate id maps to `ErrorKind::Conflict`.
    async fn create(&self, role: &NewRole) -> AppResult<Role>;
}

/// Append/read contract for login-attempt history.
#[async_trait]
pub trait LoginHistoryStore: Send + Sync {
    /// Append one immutable attempt record.
    async fn append(&self, attempt: &NewLoginAttempt) -> AppResult<()>;

    /// Attempts for the account with `login_at >= since`, most-recent-first.
    async fn recent_by_account(&self, account_id: i64, since: DateTime<Utc>)
    -> AppResult<Vec<LoginAttempt>>;
}
