//! Response payload shapes.

use serde::{Deserialize, Serialize};

/// Liveness payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Fixed "ok" once the process serves traffic.
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// Readiness payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    /// Overall readiness.
    pub status: String,
    /// Database connectivity.
    pub database: String,
}
