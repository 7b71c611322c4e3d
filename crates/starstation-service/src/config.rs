//! Service configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for a [`GameService`](crate::GameService) instance
///
/// The defaults give an in-memory store with the embedded seed catalogs,
/// which is what tests and the demo want; a deployment points `db_path` at
/// a file and optionally overrides the catalog directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Database file; None keeps everything in memory
    pub db_path: Option<PathBuf>,
    /// Directory of RON catalog files; None uses the embedded seed data
    pub catalog_dir: Option<PathBuf>,
    /// Seed for the deterministic RNG
    pub rng_seed: u64,
}

impl ServiceConfig {
    /// Persist to a database file
    pub fn with_db_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.db_path = Some(path.into());
        self
    }

    /// Load catalogs from a directory instead of the embedded seed data
    pub fn with_catalog_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.catalog_dir = Some(dir.into());
        self
    }

    /// Use a specific RNG seed
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = seed;
        self
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            catalog_dir: None,
            rng_seed: 12345,
        }
    }
}
