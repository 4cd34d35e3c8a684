//! Login-failure tracking and account lockout.

pub mod tracker;

pub use tracker::LockoutTracker;
