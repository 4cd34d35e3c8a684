//! Account entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::role::RoleId;
use super::status::Status;

/// A registered account in the gateway.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Account {
    /// Unique account identifier.
    pub id: i64,
    /// Human-readable name.
    pub name: String,
    /// Email address, unique, stored lowercase.
    pub email: String,
    /// Mobile number (optional).
    pub mobile: Option<i64>,
    /// Assigned role.
    pub role: RoleId,
    /// Permission snapshot granted to this account.
    pub permissions: Vec<String>,
    /// Argon2 credential hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Account status.
    pub status: Status,
    /// Account locked until this time (if locked).
    pub locked_until: Option<DateTime<Utc>>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Whether the account is currently locked out. Expiry is evaluated
    /// lazily; a past `locked_until` means unlocked, no write needed.
    pub fn is_locked(&self) -> bool {
        matches!(self.locked_until, Some(until) if until > Utc::now())
    }
}

/// Data required to create a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAccount {
    /// Human-readable name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Mobile number (optional).
    pub mobile: Option<i64>,
    /// Assigned role.
    pub role: RoleId,
    /// Permission snapshot granted to this account.
    pub permissions: Vec<String>,
    /// Pre-hashed credential.
    pub password_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn account(locked_until: Option<DateTime<Utc>>) -> Account {
        Account {
            id: 1,
            name: "test".to_string(),
            email: "test@example.com".to_string(),
            mobile: None,
            role: RoleId::User,
            permissions: vec![],
            password_hash: String::new(),
            status: Status::Active,
            locked_until,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_lock_expiry_is_lazy() {
        assert!(!account(None).is_locked());
        assert!(account(Some(Utc::now() + Duration::minutes(5))).is_locked());
        assert!(!account(Some(Utc::now() - Duration::minutes(5))).is_locked());
    }

    #[test]
    fn test_password_hash_never_serialized() {
        let mut acct = account(None);
        acct.password_hash = "secret-hash".to_string();
        let json = serde_json::to_value(&acct).unwrap();
        assert!(json.get("password_hash").is_none());
    }
}
