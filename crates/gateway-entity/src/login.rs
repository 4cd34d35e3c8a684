//! Login-attempt history records.
//!
//! Records are append-only: created once per login attempt, never mutated
//! or deleted. They are the sole read source for lockout accounting.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

/// Outcome of a single login attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum AttemptOutcome {
    /// Credentials verified, token issued.
    Success,
    /// Credentials rejected.
    Failure,
}

impl AttemptOutcome {
    /// Return the outcome as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
        }
    }
}

impl fmt::Display for AttemptOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A persisted login attempt.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LoginAttempt {
    /// Record identifier.
    pub id: i64,
    /// Account the attempt was made against.
    pub account_id: i64,
    /// Outcome of the attempt.
    pub outcome: AttemptOutcome,
    /// Token issued on success.
    pub token: Option<String>,
    /// Optional failure reason.
    pub reason: Option<String>,
    /// Permission snapshot at attempt time.
    pub permissions: Vec<String>,
    /// When the attempt happened.
    pub login_at: DateTime<Utc>,
}

/// Data required to append a new login attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLoginAttempt {
    /// Account the attempt was made against.
    pub account_id: i64,
    /// Outcome of the attempt.
    pub outcome: AttemptOutcome,
    /// Token issued on success.
    pub token: Option<String>,
    /// Optional failure reason.
    pub reason: Option<String>,
    /// Permission snapshot at attempt time.
    pub permissions: Vec<String>,
}
