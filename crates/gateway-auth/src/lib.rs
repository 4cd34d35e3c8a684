//! # gateway-auth
//!
//! The authentication and access-control engine for the SSO Gateway.
//!
//! ## Modules
//!
//! - `ports` — capability traits for the backing stores
//! - `jwt` — session token creation and verification
//! - `password` — Argon2id credential verification and policy enforcement
//! - `lockout` — login-failure tracking and progressive lockout

pub mod jwt;
pub mod lockout;
pub mod password;
pub mod ports;

pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenError};
pub use lockout::LockoutTracker;
pub use password::{PasswordHasher, PasswordPolicy};
pub use ports::{AccountStore, LoginHistoryStore, RoleStore};
