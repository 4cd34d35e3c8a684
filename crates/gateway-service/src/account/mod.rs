//! Account administration.

pub mod service;

pub use service::{AccountService, CreateAccountRequest};
