//! Role CRUD operations.

use std::sync::Arc;

use tracing::info;

use gateway_auth::ports::RoleStore;
use gateway_core::sanitize::{sanitize, sanitize_lower_slice};
use gateway_core::{AppError, AppResult};
use gateway_entity::{NewRole, Role, RoleId, Status};

/// Handles role listing, lookup, and creation.
#[derive(Clone)]
pub struct RoleService {
    roles: Arc<dyn RoleStore>,
}

impl RoleService {
    pub fn new(roles: Arc<dyn RoleStore>) -> Self {
        Self { roles }
    }

    /// Lists every role in the catalog.
    pub async fn list(&self) -> AppResult<Vec<Role>> {
        self.roles
            .list()
            .await
            .map_err(|e| e.with_code("RS-LS-1"))
    }

    /// Finds one role by identifier.
    pub async fn get(&self, id: RoleId) -> AppResult<Role> {
        self.roles
            .find_by_id(id)
            .await
            .map_err(|e| e.with_code("RS-GT-2"))?
            .ok_or_else(|| AppError::not_found(format!("Role '{id}' not found")).with_code("RS-GT-1"))
    }

    /// Creates a new role after shape validation.
    pub async fn create(&self, mut role: NewRole) -> AppResult<Role> {
        role.description = sanitize(&role.description);
        role.permissions = sanitize_lower_slice(&role.permissions);
        validate_new_role(&role).map_err(|e| e.with_code("RS-CR-1"))?;

        let created = self
            .roles
            .create(&role)
            .await
            .map_err(|e| e.with_code("RS-CR-2"))?;

        info!(role_id = %created.id, "role created");
        Ok(created)
    }
}

fn validate_new_role(role: &NewRole) -> AppResult<()> {
    let description_len = role.description.chars().count();
    if !(3..=200).contains(&description_len) {
        return Err(AppError::validation(
            "description must be between 3 and 200 characters",
        ));
    }
    for permission in &role.permissions {
        let len = permission.chars().count();
        if !(3..=30).contains(&len) {
            return Err(AppError::validation(format!(
                "permission '{permission}' must be between 3 and 30 characters"
            )));
        }
    }
    if !matches!(role.status, Status::Active | Status::Inactive) {
        return Err(AppError::validation(
            "role status must be active or inactive",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_role() -> NewRole {
        NewRole {
            id: RoleId::Admin,
            description: "Administration".to_string(),
            permissions: vec!["role_read".to_string(), "role_write".to_string()],
            status: Status::Active,
        }
    }

    #[test]
    fn test_validate_accepts_sane_role() {
        assert!(validate_new_role(&new_role()).is_ok());
    }

    #[test]
    fn test_validate_rejects_short_description() {
        let mut role = new_role();
        role.description = "ab".to_string();
        assert!(validate_new_role(&role).is_err());
    }

    #[test]
    fn test_validate_rejects_bad_permission_length() {
        let mut role = new_role();
        role.permissions.push("ab".to_string());
        assert!(validate_new_role(&role).is_err());
    }

    #[test]
    fn test_validate_rejects_suspended_status() {
        let mut role = new_role();
        role.status = Status::Suspended;
        assert!(validate_new_role(&role).is_err());
    }
}
