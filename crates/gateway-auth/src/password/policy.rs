//! Password complexity rules applied before hashing.

use gateway_core::{AppError, AppResult};

/// Characters accepted as the required special character.
const SPECIAL_CHARS: [char; 3] = ['_', '-', '@'];

/// Length and complexity rules for new passwords.
///
/// A candidate must fit the configured length bounds and contain at least
/// one uppercase letter, one lowercase letter, one digit, and one special
/// character from `_`, `-`, `@`.
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    min_length: usize,
    max_length: usize,
}

impl PasswordPolicy {
    pub fn new(min_length: usize, max_length: usize) -> Self {
        Self {
            min_length,
            max_length,
        }
    }

    /// Checks a candidate password, returning a validation error naming
    /// the first rule it breaks.
    pub fn check(&self, password: &str) -> AppResult<()> {
        let length = password.chars().count();
        if length < self.min_length || length > self.max_length {
            return Err(AppError::validation(format!(
                "password must be between {} and {} characters",
                self.min_length, self.max_length
            )));
        }
        if !password.chars().any(|c| c.is_ascii_uppercase()) {
            return Err(AppError::validation(
                "password must contain an uppercase letter",
            ));
        }
        if !password.chars().any(|c| c.is_ascii_lowercase()) {
            return Err(AppError::validation(
                "password must contain a lowercase letter",
            ));
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(AppError::validation("password must contain a digit"));
        }
        if !password.chars().any(|c| SPECIAL_CHARS.contains(&c)) {
            return Err(AppError::validation(
                "password must contain one of '_', '-', '@'",
            ));
        }
        Ok(())
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self::new(8, 20)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_compliant_password() {
        let policy = PasswordPolicy::default();
        assert!(policy.check("Abcdef1@").is_ok());
        assert!(policy.check("Str0ng_pass-word").is_ok());
    }

    #[test]
    fn test_rejects_length_violations() {
        let policy = PasswordPolicy::default();
        assert!(policy.check("Ab1@").is_err());
        assert!(policy.check("Abcdefghij1@extra-long-tail").is_err());
    }

    #[test]
    fn test_rejects_missing_character_classes() {
        let policy = PasswordPolicy::default();
        assert!(policy.check("abcdef1@").is_err()); // no uppercase
        assert!(policy.check("ABCDEF1@").is_err()); // no lowercase
        assert!(policy.check("Abcdefg@").is_err()); // no digit
        assert!(policy.check("Abcdefg1").is_err()); // no special
        assert!(policy.check("Abcdef1!").is_err()); // '!' not accepted
    }
}
