//! Session issuance and sign-in orchestration.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use gateway_auth::jwt::JwtEncoder;
use gateway_auth::lockout::LockoutTracker;
use gateway_auth::password::{PasswordHasher, PasswordPolicy};
use gateway_auth::ports::{AccountStore, LoginHistoryStore, RoleStore};
use gateway_core::config::AuthConfig;
use gateway_core::{AppError, AppResult};
use gateway_entity::{Account, AttemptOutcome, NewLoginAttempt, RoleId};

use super::request::SigninRequest;

/// Result of a successful anonymous session grant.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SessionGrant {
    /// Signed session token.
    pub token: String,
    /// Permission snapshot embedded in the token.
    pub permissions: Vec<String>,
}

/// Result of a successful sign-in.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SigninGrant {
    /// Signed session token bound to the account.
    pub token: String,
    /// Permission snapshot embedded in the token.
    pub permissions: Vec<String>,
    /// The signed-in account. The password hash never serializes.
    pub account: Account,
}

/// Orchestrates anonymous session grants and credential sign-in.
#[derive(Clone)]
pub struct AuthService {
    accounts: Arc<dyn AccountStore>,
    roles: Arc<dyn RoleStore>,
    history: Arc<dyn LoginHistoryStore>,
    lockout: LockoutTracker,
    hasher: Arc<PasswordHasher>,
    policy: PasswordPolicy,
    encoder: Arc<JwtEncoder>,
    /// Upper bound on each individual store call.
    store_timeout: Duration,
}

impl AuthService {
    pub fn new(
        config: &AuthConfig,
        accounts: Arc<dyn AccountStore>,
        roles: Arc<dyn RoleStore>,
        history: Arc<dyn LoginHistoryStore>,
        lockout: LockoutTracker,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            accounts,
            roles,
            history,
            lockout,
            hasher,
            policy: PasswordPolicy::new(config.password_min_length, config.password_max_length),
            encoder,
            store_timeout: Duration::from_secs(config.store_call_timeout_seconds),
        }
    }

    /// Issues an anonymous session token from the `session_user` role.
    pub async fn session(&self) -> AppResult<SessionGrant> {
        let role = self
            .bounded(self.roles.find_by_id(RoleId::SessionUser))
            .await
            .map_err(|e| e.with_code("AH-SN-2"))?
            .ok_or_else(|| AppError::not_found("Session role not found").with_code("AH-SN-1"))?;

        if !role.status.is_active() {
            return Err(AppError::forbidden("Session role is inactive").with_code("AH-SN-3"));
        }

        let token = self
            .encoder
            .encode(role.id, &role.permissions, None)
            .map_err(|e| e.with_code("AH-SN-4"))?;

        Ok(SessionGrant {
            token,
            permissions: role.permissions,
        })
    }

    /// Verifies credentials and issues an account-bound token.
    ///
    /// The lock check runs before any password comparison; history writes
    /// and lock applications run on detached tasks so the response never
    /// waits on them.
    pub async fn signin(&self, mut request: SigninRequest) -> AppResult<SigninGrant> {
        request.sanitize();
        request
            .validate(&self.policy)
            .map_err(|e| e.with_code("AH-SIN-2"))?;

        let account = self
            .bounded(self.accounts.find_by_email(&request.email))
            .await
            .map_err(|e| {
                warn!(error = %e, "account lookup failed");
                AppError::database("Failed to look up account").with_code("AH-SIN-4")
            })?
            .ok_or_else(|| {
                // Same message as a wrong password, no enumeration.
                AppError::unauthenticated("invalid credentials").with_code("AH-SIN-3")
            })?;

        if !account.status.is_active() {
            return Err(
                AppError::forbidden(format!("your account is {}", account.status))
                    .with_code("AH-SIN-5"),
            );
        }

        if let Some(until) = account.locked_until {
            if account.is_locked() {
                return Err(AppError::forbidden(format!(
                    "Too many failed attempts. Try again at {}",
                    until.to_rfc2822()
                ))
                .with_code("AH-SIN-6"));
            }
        }

        let matched = self
            .hasher
            .verify_password(&request.password, &account.password_hash)?;

        if !matched {
            self.record_attempt(&account, AttemptOutcome::Failure, None);
            return Err(AppError::forbidden("invalid credentials").with_code("AH-SIN-7"));
        }

        let token = self
            .encoder
            .encode(account.role, &account.permissions, Some(&account))
            .map_err(|e| e.with_code("AH-SIN-8"))?;

        self.record_attempt(&account, AttemptOutcome::Success, Some(token.clone()));
        info!(account_id = account.id, "sign-in succeeded");

        Ok(SigninGrant {
            token,
            permissions: account.permissions.clone(),
            account,
        })
    }

    /// Appends a history record and re-evaluates the lockout policy on a
    /// detached task with its own lifetime.
    fn record_attempt(&self, account: &Account, outcome: AttemptOutcome, token: Option<String>) {
        let attempt = NewLoginAttempt {
            account_id: account.id,
            outcome,
            token,
            reason: match outcome {
                AttemptOutcome::Success => None,
                AttemptOutcome::Failure => Some("password mismatch".to_string()),
            },
            permissions: account.permissions.clone(),
        };

        let history = Arc::clone(&self.history);
        let lockout = self.lockout.clone();
        let account_id = account.id;
        let store_timeout = self.store_timeout;
        tokio::spawn(async move {
            match tokio::time::timeout(store_timeout, history.append(&attempt)).await {
                Ok(Ok(())) => {}
                Ok(Err(err)) => {
                    warn!(account_id, error = %err, "failed to record login attempt");
                }
                Err(_) => warn!(account_id, "login attempt record timed out"),
            }
            // The tracker bounds its own store calls.
            if let Err(err) = lockout.apply(account_id).await {
                warn!(account_id, error = %err, "failed to apply lockout policy");
            }
        });
    }

    /// Bounds a store call by the configured per-call timeout.
    async fn bounded<T>(&self, call: impl Future<Output = AppResult<T>>) -> AppResult<T> {
        tokio::time::timeout(self.store_timeout, call)
            .await
            .map_err(|_| AppError::database("store call timed out"))?
    }
}
