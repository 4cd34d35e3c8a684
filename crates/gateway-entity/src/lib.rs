//! # gateway-entity
//!
//! Domain models for the SSO Gateway: accounts, roles, login-attempt
//! history, and their shared status enumerations.

pub mod account;
pub mod login;
pub mod role;
pub mod status;

pub use account::{Account, NewAccount};
pub use login::{AttemptOutcome, LoginAttempt, NewLoginAttempt};
pub use role::{NewRole, Role, RoleId};
pub use status::Status;
