//! Session issuance and sign-in orchestration.

pub mod request;
pub mod service;

pub use request::SigninRequest;
pub use service::{AuthService, SessionGrant, SigninGrant};
