//! # gateway-database
//!
//! PostgreSQL connection management and concrete store implementations
//! for the SSO Gateway entities.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use repositories::{AccountRepository, LoginHistoryRepository, RoleRepository};
