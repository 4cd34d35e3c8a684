//! # gateway-service
//!
//! Business logic service layer for the SSO Gateway. Each service
//! orchestrates stores, the lockout tracker, and token issuance to
//! implement application-level use cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod account;
pub mod auth;
pub mod role;

pub use account::{AccountService, CreateAccountRequest};
pub use auth::{AuthService, SessionGrant, SigninGrant, SigninRequest};
pub use role::RoleService;
