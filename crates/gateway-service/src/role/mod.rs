//! Role catalog management.

pub mod service;

pub use service::RoleService;
