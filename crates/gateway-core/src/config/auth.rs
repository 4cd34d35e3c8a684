//! Authentication, token, and lockout configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
///
/// The lockout lookback window and the lockout duration are exposed as
/// independent settings; their defaults are equal, matching the historic
/// behavior where a single value served both purposes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Issuer claim embedded in every token.
    #[serde(default = "default_issuer")]
    pub jwt_issuer: String,
    /// Subject claim embedded in every token.
    #[serde(default = "default_subject")]
    pub jwt_subject: String,
    /// Audience claim embedded in every token.
    #[serde(default = "default_audience")]
    pub jwt_audience: Vec<String>,
    /// Token lifespan in seconds.
    #[serde(default = "default_lifespan")]
    pub token_lifespan_seconds: u64,
    /// Maximum failed login attempts before lockout.
    #[serde(default = "default_max_failed")]
    pub max_failed_attempts: u32,
    /// Lookback window in seconds when counting recent failures.
    #[serde(default = "default_lockout_window")]
    pub lockout_window_seconds: u64,
    /// How long an account stays locked once the threshold is reached,
    /// in seconds.
    #[serde(default = "default_lockout_duration")]
    pub lockout_duration_seconds: u64,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Maximum password length.
    #[serde(default = "default_password_max")]
    pub password_max_length: usize,
    /// Timeout applied to every individual store call, in seconds.
    #[serde(default = "default_store_timeout")]
    pub store_call_timeout_seconds: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            jwt_issuer: default_issuer(),
            jwt_subject: default_subject(),
            jwt_audience: default_audience(),
            token_lifespan_seconds: default_lifespan(),
            max_failed_attempts: default_max_failed(),
            lockout_window_seconds: default_lockout_window(),
            lockout_duration_seconds: default_lockout_duration(),
            password_min_length: default_password_min(),
            password_max_length: default_password_max(),
            store_call_timeout_seconds: default_store_timeout(),
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_issuer() -> String {
    "sso-gateway".to_string()
}

fn default_subject() -> String {
    "session".to_string()
}

fn default_audience() -> Vec<String> {
    vec!["sso-gateway".to_string()]
}

fn default_lifespan() -> u64 {
    3600
}

fn default_max_failed() -> u32 {
    5
}

fn default_lockout_window() -> u64 {
    1800
}

fn default_lockout_duration() -> u64 {
    1800
}

fn default_password_min() -> usize {
    8
}

fn default_password_max() -> usize {
    20
}

fn default_store_timeout() -> u64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AuthConfig::default();
        assert_eq!(config.max_failed_attempts, 5);
        assert_eq!(config.lockout_window_seconds, config.lockout_duration_seconds);
        assert_eq!(config.password_min_length, 8);
        assert_eq!(config.password_max_length, 20);
    }
}
