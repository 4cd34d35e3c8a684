//! Concrete PostgreSQL implementations of the store traits.

pub mod account;
pub mod login_history;
pub mod role;

pub use account::AccountRepository;
pub use login_history::LoginHistoryRepository;
pub use role::RoleRepository;
