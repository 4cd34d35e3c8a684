//! Sign-in request shape, sanitization, and validation.

use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use gateway_core::sanitize::{sanitize, sanitize_lower};
use gateway_core::{AppError, AppResult};

use gateway_auth::password::PasswordPolicy;

/// Sign-in request body.
///
/// The `is_using_*` flags select which credential fields the caller
/// intends to be checked; only flagged fields are validated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SigninRequest {
    #[serde(default)]
    pub is_using_password: bool,
    #[serde(default)]
    pub is_using_mobile: bool,
    #[serde(default)]
    pub is_using_email: bool,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub mobile_number: i64,
    #[serde(default)]
    pub device_hash: String,
}

impl SigninRequest {
    /// Trims whitespace and lowercases the email for the store lookup.
    pub fn sanitize(&mut self) {
        self.email = sanitize_lower(&self.email);
        self.password = sanitize(&self.password);
        self.device_hash = sanitize(&self.device_hash);
    }

    /// Validates the flagged credential fields, returning the first
    /// violation found.
    pub fn validate(&self, policy: &PasswordPolicy) -> AppResult<()> {
        if self.email.is_empty() {
            return Err(AppError::validation("email is required"));
        }
        if self.is_using_email && !self.email.validate_email() {
            return Err(AppError::validation("email format is invalid"));
        }
        if self.is_using_mobile && !is_valid_mobile(self.mobile_number) {
            return Err(AppError::validation(
                "mobile number must be 10 digits starting with 6-9",
            ));
        }
        if self.is_using_password {
            policy.check(&self.password)?;
        }
        Ok(())
    }
}

/// Ten digits, first digit 6-9.
fn is_valid_mobile(number: i64) -> bool {
    (6_000_000_000..=9_999_999_999).contains(&number)
}
