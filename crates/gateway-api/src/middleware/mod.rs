//! Axum middleware stack.

pub mod cors;
pub mod logging;
pub mod permission;
pub mod recovery;

pub use permission::PermissionGate;
