//! # gateway-core
//!
//! Core crate for the SSO Gateway. Contains configuration schemas, the
//! unified error system, the wire response envelope, and input
//! sanitization helpers.
//!
//! This crate has **no** internal dependencies on other gateway crates.

pub mod config;
pub mod error;
pub mod result;
pub mod sanitize;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
