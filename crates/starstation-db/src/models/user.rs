//! User account models for database storage.

use native_db::*;
use native_model::{native_model, Model};
use serde::{Deserialize, Serialize};
use starstation_core::UserId;

/// Stored user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[native_model(id = 1, version = 1)]
#[native_db]
pub struct StoredUser {
    /// Primary key - user ID.
    #[primary_key]
    pub id: u64,
    /// Unique login name.
    #[secondary_key(unique)]
    pub username: String,
    /// Hex-encoded credential hash.
    pub password_hash: String,
}

impl StoredUser {
    /// The canonical user ID for this record.
    pub fn user_id(&self) -> UserId {
        UserId::new(self.id)
    }
}

/// Singleton row handing out the next free primary key for a sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[native_model(id = 2, version = 1)]
#[native_db]
pub struct StoredIdCounter {
    /// Sequence name - single row per sequence.
    #[primary_key]
    pub id: String,
    /// Next unassigned value.
    pub next: u64,
}
