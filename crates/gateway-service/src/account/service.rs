//! Account CRUD operations (admin plumbing, not signup).

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use validator::ValidateEmail;

use gateway_auth::password::{PasswordHasher, PasswordPolicy};
use gateway_auth::ports::AccountStore;
use gateway_core::sanitize::{sanitize, sanitize_lower, sanitize_lower_slice};
use gateway_core::{AppError, AppResult};
use gateway_entity::{Account, NewAccount, RoleId};

/// Data for creating an account through the admin surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAccountRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub mobile: Option<i64>,
    pub role: RoleId,
    #[serde(default)]
    pub permissions: Vec<String>,
    pub password: String,
}

/// Handles account lookup and creation.
#[derive(Clone)]
pub struct AccountService {
    accounts: Arc<dyn AccountStore>,
    hasher: Arc<PasswordHasher>,
    policy: PasswordPolicy,
}

impl AccountService {
    pub fn new(
        accounts: Arc<dyn AccountStore>,
        hasher: Arc<PasswordHasher>,
        policy: PasswordPolicy,
    ) -> Self {
        Self {
            accounts,
            hasher,
            policy,
        }
    }

    /// Finds one account by primary key.
    pub async fn get(&self, id: i64) -> AppResult<Account> {
        self.accounts
            .find_by_id(id)
            .await
            .map_err(|e| e.with_code("US-GT-2"))?
            .ok_or_else(|| AppError::not_found(format!("Account {id} not found")).with_code("US-GT-1"))
    }

    /// Creates an account with a freshly hashed password.
    pub async fn create(&self, mut request: CreateAccountRequest) -> AppResult<Account> {
        request.name = sanitize(&request.name);
        request.email = sanitize_lower(&request.email);
        request.permissions = sanitize_lower_slice(&request.permissions);
        validate_request(&request).map_err(|e| e.with_code("US-CR-1"))?;
        self.policy
            .check(&request.password)
            .map_err(|e| e.with_code("US-CR-1"))?;

        let password_hash = self.hasher.hash_password(&request.password)?;
        let account = NewAccount {
            name: request.name,
            email: request.email,
            mobile: request.mobile,
            role: request.role,
            permissions: request.permissions,
            password_hash,
        };

        let created = self
            .accounts
            .create(&account)
            .await
            .map_err(|e| e.with_code("US-CR-2"))?;

        info!(account_id = created.id, "account created");
        Ok(created)
    }
}

fn validate_request(request: &CreateAccountRequest) -> AppResult<()> {
    let name_len = request.name.chars().count();
    if !(2..=100).contains(&name_len) {
        return Err(AppError::validation(
            "name must be between 2 and 100 characters",
        ));
    }
    if !request.email.validate_email() {
        return Err(AppError::validation("email format is invalid"));
    }
    if let Some(mobile) = request.mobile {
        if !(6_000_000_000..=9_999_999_999).contains(&mobile) {
            return Err(AppError::validation(
                "mobile number must be 10 digits starting with 6-9",
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateAccountRequest {
        CreateAccountRequest {
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            mobile: Some(9_876_543_210),
            role: RoleId::User,
            permissions: vec!["user_read".to_string()],
            password: "Abcdef1@".to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_sane_request() {
        assert!(validate_request(&request()).is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_email() {
        let mut req = request();
        req.email = "nope".to_string();
        assert!(validate_request(&req).is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range_mobile() {
        let mut req = request();
        req.mobile = Some(1_234_567_890);
        assert!(validate_request(&req).is_err());
    }
}
