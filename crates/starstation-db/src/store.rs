//! Database store wrapper.

use crate::error::{Error, Result};
use crate::models::*;
use native_db::*;
use starstation_core::{BuildingCatalog, EventCatalog, GameState, UserId};
use std::path::Path;
use std::sync::LazyLock;

const USER_ID_SEQUENCE: &str = "user_id";

// Static models for the database
static MODELS: LazyLock<Models> = LazyLock::new(|| {
    let mut models = Models::new();
    models.define::<StoredUser>().unwrap();
    models.define::<StoredIdCounter>().unwrap();
    models.define::<StoredGameState>().unwrap();
    models.define::<StoredBuildingDef>().unwrap();
    models.define::<StoredEventDef>().unwrap();
    models
});

/// Document store for users, game states and catalogs.
pub struct Store {
    pub(crate) db: Database<'static>,
}

impl Store {
    /// Open or create a database at the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let db = Builder::new()
            .create(&MODELS, path.as_ref())
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(Self { db })
    }

    /// Create an in-memory database.
    pub fn in_memory() -> Result<Self> {
        let db = Builder::new()
            .create_in_memory(&MODELS)
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(Self { db })
    }

    /// Create a user record, assigning the next free ID.
    ///
    /// The username check, the sequence bump and the insert happen in one
    /// transaction.
    pub fn create_user(&self, username: &str, password_hash: &str) -> Result<UserId> {
        let rw = self.db.rw_transaction()?;

        let existing: Option<StoredUser> = rw
            .get()
            .secondary(StoredUserKey::username, username.to_string())?;
        if existing.is_some() {
            return Err(Error::DuplicateKey(username.to_string()));
        }

        let next = rw
            .get()
            .primary::<StoredIdCounter>(USER_ID_SEQUENCE.to_string())?
            .map(|c| c.next)
            .unwrap_or(1);
        rw.upsert(StoredIdCounter {
            id: USER_ID_SEQUENCE.to_string(),
            next: next + 1,
        })?;
        rw.insert(StoredUser {
            id: next,
            username: username.to_string(),
            password_hash: password_hash.to_string(),
        })?;
        rw.commit()?;
        Ok(UserId::new(next))
    }

    /// Look up a user by login name.
    pub fn find_user(&self, username: &str) -> Result<Option<StoredUser>> {
        let r = self.db.r_transaction()?;
        let user = r
            .get()
            .secondary(StoredUserKey::username, username.to_string())?;
        Ok(user)
    }

    /// Save a game state as one record write.
    pub fn save_game_state(&self, state: &GameState) -> Result<()> {
        let stored = StoredGameState::from_state(state);
        let rw = self.db.rw_transaction()?;
        rw.upsert(stored)?;
        rw.commit()?;
        Ok(())
    }

    /// Load a game state by user ID.
    pub fn load_game_state(&self, user_id: UserId) -> Result<Option<GameState>> {
        let r = self.db.r_transaction()?;
        let stored: Option<StoredGameState> = r.get().primary(user_id.raw())?;
        Ok(stored.map(|s| s.to_state()))
    }

    /// Seed both catalogs, no-op when reference data is already present.
    ///
    /// Returns whether anything was written. Meant as an explicit startup
    /// step, never a request-handling side effect.
    pub fn seed_catalogs(
        &self,
        buildings: &BuildingCatalog,
        events: &EventCatalog,
    ) -> Result<bool> {
        if !self.load_building_catalog()?.is_empty() || !self.load_event_catalog()?.is_empty() {
            return Ok(false);
        }

        let rw = self.db.rw_transaction()?;
        for def in buildings.values() {
            rw.upsert(StoredBuildingDef::from_def(def))?;
        }
        for def in events.values() {
            rw.upsert(StoredEventDef::from_def(def))?;
        }
        rw.commit()?;
        Ok(true)
    }
}

impl From<native_db::db_type::Error> for Error {
    fn from(err: native_db::db_type::Error) -> Self {
        Error::Database(err.to_string())
    }
}
