//! # gateway-api
//!
//! HTTP API layer for the SSO Gateway — Axum routes, middleware stack,
//! handlers, and the `AppError` → envelope mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, serve};
pub use state::AppState;
