//! Entity status enumeration shared by accounts and roles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of an account or role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Enabled and usable.
    Active,
    /// Temporarily disabled, not due to any violation.
    Inactive,
    /// Restricted due to a violation or admin action, possibly reversible.
    Suspended,
    /// Permanently or strongly restricted by the system or an admin.
    Blocked,
}

impl Status {
    /// Whether the entity is usable for login or token issuance.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Suspended => "suspended",
            Self::Blocked => "blocked",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = gateway_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "suspended" => Ok(Self::Suspended),
            "blocked" => Ok(Self::Blocked),
            _ => Err(gateway_core::AppError::validation(format!(
                "Invalid status: '{s}'. Expected one of: active, inactive, suspended, blocked"
            ))),
        }
    }
}
