//! StarStation DB - Database layer using native_db
//!
//! Provides persistent storage for:
//! - User accounts
//! - Per-user game states (balances, buildings, embedded event)
//! - Building and event catalogs (seeded once at startup)

mod error;
mod models;
mod queries;
mod store;

pub use error::{Error, Result};
pub use models::StoredUser;
pub use store::Store;
