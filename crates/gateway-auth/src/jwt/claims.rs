//! Session token claims.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use gateway_entity::RoleId;

/// Claims payload embedded in every session token.
///
/// The permission set is a snapshot taken at issuance time; it is never
/// refreshed from the store while the token lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Account identifier; 0 for anonymous/session tokens.
    pub user_id: i64,
    /// Role at the time of issuance.
    pub role: RoleId,
    /// Permission snapshot. A set: duplicates collapse.
    pub permissions: HashSet<String>,
    /// Issuer.
    pub iss: String,
    /// Subject.
    pub sub: String,
    /// Audience.
    pub aud: Vec<String>,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Not-before timestamp (seconds since epoch).
    pub nbf: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Unique token id, reserved for future revocation/audit.
    pub jti: Uuid,
}

impl Claims {
    /// Whether the named permission is in the snapshot.
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.contains(permission)
    }
}
