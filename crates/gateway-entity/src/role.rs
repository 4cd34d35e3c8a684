//! Role model and the closed role identifier enumeration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;

use super::status::Status;

/// Closed enumeration of role identifiers known to the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RoleId {
    /// Anonymous caller holding a session token.
    SessionUser,
    /// Caller without any session.
    AnonymousUser,
    /// Operates the gateway itself.
    SystemAdmin,
    /// Tenant administrator.
    Admin,
    /// Regular signed-in user.
    User,
}

impl RoleId {
    /// Return the role identifier as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SessionUser => "session_user",
            Self::AnonymousUser => "anonymous_user",
            Self::SystemAdmin => "system_admin",
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RoleId {
    type Err = gateway_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "session_user" => Ok(Self::SessionUser),
            "anonymous_user" => Ok(Self::AnonymousUser),
            "system_admin" => Ok(Self::SystemAdmin),
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            _ => Err(gateway_core::AppError::validation(format!(
                "Invalid role: '{s}'. Expected one of: session_user, anonymous_user, \
                 system_admin, admin, user"
            ))),
        }
    }
}

/// A role with its permission set.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Role {
    /// Role identifier.
    pub id: RoleId,
    /// Human-readable description.
    pub description: String,
    /// Capability strings granted by this role.
    pub permissions: Vec<String>,
    /// Role status; must be active for token issuance.
    pub status: Status,
    /// When the role was created.
    pub created_at: DateTime<Utc>,
    /// When the role was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRole {
    /// Role identifier.
    pub id: RoleId,
    /// Human-readable description.
    pub description: String,
    /// Capability strings granted by this role.
    pub permissions: Vec<String>,
    /// Initial status.
    pub status: Status,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_id_from_str() {
        assert_eq!("session_user".parse::<RoleId>().unwrap(), RoleId::SessionUser);
        assert_eq!("ADMIN".parse::<RoleId>().unwrap(), RoleId::Admin);
        assert!("superuser".parse::<RoleId>().is_err());
    }

    #[test]
    fn test_role_id_round_trip() {
        for id in [
            RoleId::SessionUser,
            RoleId::AnonymousUser,
            RoleId::SystemAdmin,
            RoleId::Admin,
            RoleId::User,
        ] {
            assert_eq!(id.as_str().parse::<RoleId>().unwrap(), id);
        }
    }
}
