//! StarStation Service - Game operations behind a transport-agnostic API
//!
//! This crate wires the domain rules to persistence and auth:
//! - `GameService` with register / login / get_state / harvest / build /
//!   trigger_event
//! - The `AuthProvider` boundary and its store-backed implementation
//! - Per-user serialization of read-modify-write operations
//! - Startup catalog seeding and service configuration
//!
//! A transport layer (HTTP or otherwise) maps these calls and
//! [`ErrorKind`] classes onto its own surface.

mod auth;
mod clock;
mod config;
mod error;
mod locks;
mod service;

pub use auth::{hash_str, AuthProvider, StoreAuth};
pub use clock::SystemClock;
pub use config::ServiceConfig;
pub use error::{Error, ErrorKind, Result};
pub use locks::UserLocks;
pub use service::{BuildReceipt, GameService, HarvestReceipt, Registration, StateView};
