//! Authentication boundary
//!
//! The game service only needs register/login returning a canonical user
//! ID; everything else about credentials is behind [`AuthProvider`]. The
//! bundled implementation keeps accounts in the document store with a plain
//! SHA-256 credential hash.

use crate::error::{Error, Result};
use sha2::{Digest, Sha256};
use starstation_core::UserId;
use starstation_db::Store;
use std::sync::Arc;

/// Opaque register/login provider
pub trait AuthProvider {
    /// Create an account, failing on a duplicate username
    fn register(&self, username: &str, password: &str) -> Result<UserId>;

    /// Verify credentials and return the account's user ID
    ///
    /// Unknown username and wrong password are indistinguishable to the
    /// caller.
    fn login(&self, username: &str, password: &str) -> Result<UserId>;
}

/// Hex-encoded SHA-256 digest of a credential string
pub fn hash_str(input: &str) -> String {
    format!("{:x}", Sha256::digest(input))
}

/// Store-backed auth provider
pub struct StoreAuth {
    store: Arc<Store>,
}

impl StoreAuth {
    /// Create a provider over the given store
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }
}

impl AuthProvider for StoreAuth {
    fn register(&self, username: &str, password: &str) -> Result<UserId> {
        self.store
            .create_user(username, &hash_str(password))
            .map_err(|err| match err {
                starstation_db::Error::DuplicateKey(name) => Error::DuplicateUsername(name),
                other => Error::Persistence(other),
            })
    }

    fn login(&self, username: &str, password: &str) -> Result<UserId> {
        let user = self
            .store
            .find_user(username)?
            .ok_or(Error::InvalidCredentials)?;
        if user.password_hash != hash_str(password) {
            return Err(Error::InvalidCredentials);
        }
        Ok(user.user_id())
    }
}
