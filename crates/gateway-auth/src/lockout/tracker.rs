//! Failure counting and lock decisions over the login history.

use std::sync::Arc;

use chrono::{Duration, Utc};

use gateway_core::config::AuthConfig;
use gateway_core::{AppError, AppResult};
use gateway_entity::AttemptOutcome;

use crate::ports::{AccountStore, LoginHistoryStore};

/// Tracks recent login failures and locks accounts past the threshold.
///
/// Every store call is bounded by the configured per-call timeout.
/// Failure counting is fail-open: when the history store cannot be read
/// in time, the count is treated as zero rather than blocking the
/// sign-in path.
#[derive(Clone)]
pub struct LockoutTracker {
    history: Arc<dyn LoginHistoryStore>,
    accounts: Arc<dyn AccountStore>,
    max_failed_attempts: u32,
    lockout_window: Duration,
    lockout_duration: Duration,
    store_timeout: std::time::Duration,
}

impl LockoutTracker {
    pub fn new(
        config: &AuthConfig,
        history: Arc<dyn LoginHistoryStore>,
        accounts: Arc<dyn AccountStore>,
    ) -> Self {
        Self {
            history,
            accounts,
            max_failed_attempts: config.max_failed_attempts,
            lockout_window: Duration::seconds(config.lockout_window_seconds as i64),
            lockout_duration: Duration::seconds(config.lockout_duration_seconds as i64),
            store_timeout: std::time::Duration::from_secs(config.store_call_timeout_seconds),
        }
    }

    /// Counts consecutive failures inside the lookback window.
    ///
    /// The scan walks attempts most-recent-first and stops at the first
    /// success: a successful sign-in resets the streak. History read
    /// errors and timeouts are logged and counted as zero.
    pub async fn recent_failure_count(&self, account_id: i64) -> u32 {
        let since = Utc::now() - self.lockout_window;
        let read = tokio::time::timeout(
            self.store_timeout,
            self.history.recent_by_account(account_id, since),
        );
        let attempts = match read.await {
            Ok(Ok(attempts)) => attempts,
            Ok(Err(err)) => {
                tracing::warn!(account_id, error = %err, "failed to read login history");
                return 0;
            }
            Err(_) => {
                tracing::warn!(account_id, "login history read timed out");
                return 0;
            }
        };

        attempts
            .iter()
            .take_while(|a| a.outcome != AttemptOutcome::Success)
            .count() as u32
    }

    /// Whether the streak has reached the lockout threshold.
    pub fn should_lock(&self, failure_count: u32) -> bool {
        failure_count >= self.max_failed_attempts
    }

    /// Re-counts failures after a fresh one and locks the account when the
    /// threshold is reached. Issues at most one lock write per call.
    pub async fn apply(&self, account_id: i64) -> AppResult<()> {
        let failures = self.recent_failure_count(account_id).await;
        if self.should_lock(failures) {
            let until = Utc::now() + self.lockout_duration;
            tokio::time::timeout(
                self.store_timeout,
                self.accounts.set_lock_until(account_id, until),
            )
            .await
            .map_err(|_| AppError::database("account lock write timed out"))??;
            tracing::info!(account_id, %until, failures, "account locked");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::DateTime;
    use gateway_core::AppError;
    use gateway_entity::{
        Account, LoginAttempt, NewAccount, NewLoginAttempt, NewRole, Role, RoleId,
    };

    #[derive(Default)]
    struct FakeHistory {
        attempts: Mutex<Vec<LoginAttempt>>,
        fail_reads: bool,
    }

    #[async_trait]
    impl LoginHistoryStore for FakeHistory {
        async fn append(&self, attempt: &NewLoginAttempt) -> AppResult<()> {
            let mut attempts = self.attempts.lock().unwrap();
            let id = attempts.len() as i64 + 1;
            attempts.push(LoginAttempt {
                id,
                account_id: attempt.account_id,
                outcome: attempt.outcome,
                token: attempt.token.clone(),
                reason: attempt.reason.clone(),
                permissions: attempt.permissions.clone(),
                login_at: Utc::now(),
            });
            Ok(())
        }

        async fn recent_by_account(
            &self,
            account_id: i64,
            since: DateTime<Utc>,
        ) -> AppResult<Vec<LoginAttempt>> {
            if self.fail_reads {
                return Err(AppError::database("history store down"));
            }
            let attempts = self.attempts.lock().unwrap();
            let mut recent: Vec<LoginAttempt> = attempts
                .iter()
                .filter(|a| a.account_id == account_id && a.login_at >= since)
                .cloned()
                .collect();
            recent.sort_by(|a, b| b.login_at.cmp(&a.login_at).then(b.id.cmp(&a.id)));
            Ok(recent)
        }
    }

    #[derive(Default)]
    struct FakeAccounts {
        locks: Mutex<Vec<(i64, DateTime<Utc>)>>,
    }

    #[async_trait]
    impl AccountStore for FakeAccounts {
        async fn find_by_email(&self, _email: &str) -> AppResult<Option<Account>> {
            Ok(None)
        }

        async fn find_by_id(&self, _id: i64) -> AppResult<Option<Account>> {
            Ok(None)
        }

        async fn set_lock_until(&self, id: i64, until: DateTime<Utc>) -> AppResult<()> {
            self.locks.lock().unwrap().push((id, until));
            Ok(())
        }

        async fn create(&self, _account: &NewAccount) -> AppResult<Account> {
            Err(AppError::internal("not implemented"))
        }
    }

    fn tracker_with(
        max_failed: u32,
        history: Arc<FakeHistory>,
        accounts: Arc<FakeAccounts>,
    ) -> LockoutTracker {
        let config = AuthConfig {
            max_failed_attempts: max_failed,
            ..AuthConfig::default()
        };
        LockoutTracker::new(&config, history, accounts)
    }

    async fn record(history: &FakeHistory, account_id: i64, outcome: AttemptOutcome) {
        history
            .append(&NewLoginAttempt {
                account_id,
                outcome,
                token: None,
                reason: None,
                permissions: vec![],
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_success_resets_streak() {
        let history = Arc::new(FakeHistory::default());
        let accounts = Arc::new(FakeAccounts::default());
        let tracker = tracker_with(5, history.clone(), accounts);

        // Oldest to newest: fail, success, fail, fail.
        record(&history, 1, AttemptOutcome::Failure).await;
        record(&history, 1, AttemptOutcome::Success).await;
        record(&history, 1, AttemptOutcome::Failure).await;
        record(&history, 1, AttemptOutcome::Failure).await;

        assert_eq!(tracker.recent_failure_count(1).await, 2);
    }

    #[tokio::test]
    async fn test_empty_history_counts_zero() {
        let history = Arc::new(FakeHistory::default());
        let accounts = Arc::new(FakeAccounts::default());
        let tracker = tracker_with(5, history, accounts);

        assert_eq!(tracker.recent_failure_count(1).await, 0);
    }

    #[tokio::test]
    async fn test_history_read_error_counts_zero() {
        let history = Arc::new(FakeHistory {
            fail_reads: true,
            ..FakeHistory::default()
        });
        let accounts = Arc::new(FakeAccounts::default());
        let tracker = tracker_with(5, history, accounts);

        assert_eq!(tracker.recent_failure_count(1).await, 0);
    }

    #[tokio::test]
    async fn test_apply_locks_once_at_threshold() {
        let history = Arc::new(FakeHistory::default());
        let accounts = Arc::new(FakeAccounts::default());
        let tracker = tracker_with(3, history.clone(), accounts.clone());

        record(&history, 1, AttemptOutcome::Failure).await;
        record(&history, 1, AttemptOutcome::Failure).await;
        tracker.apply(1).await.unwrap();
        assert!(accounts.locks.lock().unwrap().is_empty());

        record(&history, 1, AttemptOutcome::Failure).await;
        tracker.apply(1).await.unwrap();

        let locks = accounts.locks.lock().unwrap();
        assert_eq!(locks.len(), 1);
        assert_eq!(locks[0].0, 1);
        assert!(locks[0].1 > Utc::now());
    }

    #[tokio::test]
    async fn test_other_accounts_do_not_contribute() {
        let history = Arc::new(FakeHistory::default());
        let accounts = Arc::new(FakeAccounts::default());
        let tracker = tracker_with(5, history.clone(), accounts);

        record(&history, 2, AttemptOutcome::Failure).await;
        record(&history, 2, AttemptOutcome::Failure).await;
        record(&history, 1, AttemptOutcome::Failure).await;

        assert_eq!(tracker.recent_failure_count(1).await, 1);
    }

    /// History store whose reads never resolve.
    struct StalledHistory;

    #[async_trait]
    impl LoginHistoryStore for StalledHistory {
        async fn append(&self, _attempt: &NewLoginAttempt) -> AppResult<()> {
            std::future::pending().await
        }

        async fn recent_by_account(
            &self,
            _account_id: i64,
            _since: DateTime<Utc>,
        ) -> AppResult<Vec<LoginAttempt>> {
            std::future::pending().await
        }
    }

    /// Account store whose lock writes never resolve.
    struct StalledAccounts;

    #[async_trait]
    impl AccountStore for StalledAccounts {
        async fn find_by_email(&self, _email: &str) -> AppResult<Option<Account>> {
            Ok(None)
        }

        async fn find_by_id(&self, _id: i64) -> AppResult<Option<Account>> {
            Ok(None)
        }

        async fn set_lock_until(&self, _id: i64, _until: DateTime<Utc>) -> AppResult<()> {
            std::future::pending().await
        }

        async fn create(&self, _account: &NewAccount) -> AppResult<Account> {
            Err(AppError::internal("not implemented"))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_stalled_history_read_counts_zero() {
        let history = Arc::new(StalledHistory);
        let accounts = Arc::new(FakeAccounts::default());
        let tracker = LockoutTracker::new(&AuthConfig::default(), history, accounts);

        // The bounded read elapses and falls back to zero instead of
        // hanging the sign-in path.
        assert_eq!(tracker.recent_failure_count(1).await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stalled_lock_write_is_an_error() {
        let history = Arc::new(FakeHistory::default());
        let accounts = Arc::new(StalledAccounts);
        let config = AuthConfig {
            max_failed_attempts: 1,
            ..AuthConfig::default()
        };
        let tracker = LockoutTracker::new(&config, history.clone(), accounts);

        record(&history, 1, AttemptOutcome::Failure).await;
        let err = tracker.apply(1).await.unwrap_err();
        assert!(err.to_string().contains("timed out"));
    }
}
