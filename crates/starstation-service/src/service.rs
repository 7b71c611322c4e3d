//! Game operations over one user's colony
//!
//! Every operation here is a self-contained read-modify-write of a single
//! game-state record: take the user's lock, read `now` once, run the core
//! rule, persist the whole record, return. Catalogs are immutable snapshots
//! loaded at startup.

use crate::auth::{AuthProvider, StoreAuth};
use crate::config::ServiceConfig;
use crate::error::Result;
use crate::locks::{lock_unpoisoned, UserLocks};
use serde::Serialize;
use starstation_core::{
    accrual, build, trigger_event, zero_filled, ActiveEvent, Building, BuildingCatalog, Clock,
    DefId, EventCatalog, GameRng, GameState, ResourceMap, TimestampMs, TriggerOutcome, UserId,
};
use starstation_db::Store;
use starstation_script::Loader;
use std::sync::{Arc, Mutex};

/// A freshly registered account and its starter colony
#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub user_id: UserId,
    pub state: GameState,
}

/// Snapshot returned to a polling client
#[derive(Debug, Clone, Serialize)]
pub struct StateView {
    /// Spendable balances
    pub resources: ResourceMap,
    /// Owned buildings
    pub buildings: Vec<Building>,
    /// The running event, if any; expired records are not surfaced
    pub active_event: Option<ActiveEvent>,
    /// Accrued-but-uncollected amounts, recomputed fresh on every call
    pub stocked_resources: ResourceMap,
}

/// Result of committing accrued resources
#[derive(Debug, Clone, Serialize)]
pub struct HarvestReceipt {
    /// Balances after crediting
    pub resources: ResourceMap,
    /// Amounts this harvest produced
    pub harvested: ResourceMap,
}

/// Result of a successful construction
#[derive(Debug, Clone, Serialize)]
pub struct BuildReceipt {
    /// The full state after deduction and construction
    pub state: GameState,
    /// The building that was just placed
    pub building: Building,
}

/// The game service: auth, state reads and all mutations
pub struct GameService<C: Clock, A: AuthProvider> {
    store: Arc<Store>,
    auth: A,
    buildings: BuildingCatalog,
    events: EventCatalog,
    clock: C,
    locks: UserLocks,
    rng: Mutex<GameRng>,
}

impl<C: Clock> GameService<C, StoreAuth> {
    /// Open a service from configuration with the store-backed auth provider
    ///
    /// Seeds the catalogs as an explicit startup step (a no-op when the
    /// store already has them) and then serves from the stored copies.
    pub fn open(config: &ServiceConfig, clock: C) -> Result<Self> {
        let store = Arc::new(match &config.db_path {
            Some(path) => Store::open(path)?,
            None => Store::in_memory()?,
        });

        let catalogs = match &config.catalog_dir {
            Some(dir) => {
                let mut loader = Loader::new();
                loader.load_directory(dir)?;
                loader.finish()
            }
            None => starstation_script::seed_catalogs()?,
        };
        if store.seed_catalogs(&catalogs.buildings, &catalogs.events)? {
            tracing::info!(
                buildings = catalogs.buildings.len(),
                events = catalogs.events.len(),
                "seeded catalogs"
            );
        }

        let buildings = store.load_building_catalog()?;
        let events = store.load_event_catalog()?;
        let auth = StoreAuth::new(store.clone());
        Ok(Self::new(store, auth, buildings, events, clock, config.rng_seed))
    }
}

impl<C: Clock, A: AuthProvider> GameService<C, A> {
    /// Assemble a service from already-built parts
    pub fn new(
        store: Arc<Store>,
        auth: A,
        buildings: BuildingCatalog,
        events: EventCatalog,
        clock: C,
        rng_seed: u64,
    ) -> Self {
        Self {
            store,
            auth,
            buildings,
            events,
            clock,
            locks: UserLocks::new(),
            rng: Mutex::new(GameRng::new(rng_seed)),
        }
    }

    /// The clock this service reads `now` from
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Register an account and create its starter colony
    pub fn register(&self, username: &str, password: &str) -> Result<Registration> {
        validate_credentials(username, password)?;
        let user_id = self.auth.register(username, password)?;

        let now = self.clock.now_ms();
        let state = {
            let mut rng = lock_unpoisoned(&self.rng);
            GameState::starter(user_id, now, &mut rng)
        };
        self.store.save_game_state(&state)?;
        tracing::info!(%user_id, username, "registered new colony");
        Ok(Registration { user_id, state })
    }

    /// Verify credentials and return the account's user ID
    pub fn login(&self, username: &str, password: &str) -> Result<UserId> {
        validate_credentials(username, password)?;
        let user_id = match self.auth.login(username, password) {
            Ok(user_id) => user_id,
            Err(err) => {
                tracing::warn!(username, "login rejected");
                return Err(err);
            }
        };
        tracing::info!(%user_id, username, "login");
        Ok(user_id)
    }

    /// Read the colony with a fresh accrual preview
    ///
    /// Read-only apart from lazy creation of a missing state.
    pub fn get_state(&self, user_id: UserId) -> Result<StateView> {
        let user_lock = self.locks.for_user(user_id);
        let _guard = lock_unpoisoned(&user_lock);

        let now = self.clock.now_ms();
        let state = self.load_or_create(user_id, now)?;
        let stocked = zero_filled(&accrual::compute_accrual(&state, &self.buildings, now));
        tracing::debug!(%user_id, "state preview");

        Ok(StateView {
            active_event: state.live_event(now).cloned(),
            stocked_resources: stocked,
            resources: state.resources,
            buildings: state.buildings,
        })
    }

    /// Commit accrued resources into the balances
    pub fn harvest(&self, user_id: UserId) -> Result<HarvestReceipt> {
        let user_lock = self.locks.for_user(user_id);
        let _guard = lock_unpoisoned(&user_lock);

        let now = self.clock.now_ms();
        let mut state = self.load_or_create(user_id, now)?;
        let outcome = accrual::harvest(&mut state, &self.buildings, now);
        self.store.save_game_state(&state)?;
        tracing::info!(%user_id, harvested = outcome.harvested.len(), "harvest");

        Ok(HarvestReceipt {
            resources: state.resources,
            harvested: outcome.harvested,
        })
    }

    /// Construct a building, deducting its cost
    pub fn build(&self, user_id: UserId, kind: &DefId) -> Result<BuildReceipt> {
        if kind.as_str().trim().is_empty() {
            return Err(crate::Error::Validation("building type required".into()));
        }

        let user_lock = self.locks.for_user(user_id);
        let _guard = lock_unpoisoned(&user_lock);

        let now = self.clock.now_ms();
        let mut state = self.load_or_create(user_id, now)?;
        let building = {
            let mut rng = lock_unpoisoned(&self.rng);
            build(&mut state, kind, &self.buildings, &mut rng, now)
        };
        let building = match building {
            Ok(building) => building,
            Err(err) => {
                tracing::warn!(%user_id, kind = kind.as_str(), %err, "build rejected");
                return Err(err.into());
            }
        };
        self.store.save_game_state(&state)?;
        tracing::info!(%user_id, kind = kind.as_str(), "built");

        Ok(BuildReceipt { state, building })
    }

    /// Try to fire a random world event
    ///
    /// Only a successful trigger mutates state; a none-eligible answer is a
    /// pure read.
    pub fn trigger_event(&self, user_id: UserId) -> Result<TriggerOutcome> {
        let user_lock = self.locks.for_user(user_id);
        let _guard = lock_unpoisoned(&user_lock);

        let now = self.clock.now_ms();
        let mut state = self.load_or_create(user_id, now)?;
        let outcome = {
            let mut rng = lock_unpoisoned(&self.rng);
            trigger_event(&mut state, &self.events, &mut rng, now)?
        };

        match &outcome {
            TriggerOutcome::Triggered(active) => {
                self.store.save_game_state(&state)?;
                tracing::info!(%user_id, event = active.event_type.as_str(), "event triggered");
            }
            TriggerOutcome::NoneEligible { next_eligible_in_ms } => {
                tracing::debug!(%user_id, next_eligible_in_ms, "no event eligible");
            }
        }
        Ok(outcome)
    }

    /// Load a state, creating the starter colony on first access
    fn load_or_create(&self, user_id: UserId, now: TimestampMs) -> Result<GameState> {
        if let Some(state) = self.store.load_game_state(user_id)? {
            return Ok(state);
        }
        let state = {
            let mut rng = lock_unpoisoned(&self.rng);
            GameState::starter(user_id, now, &mut rng)
        };
        self.store.save_game_state(&state)?;
        tracing::info!(%user_id, "created colony on first access");
        Ok(state)
    }
}

fn validate_credentials(username: &str, password: &str) -> Result<()> {
    if username.trim().is_empty() {
        return Err(crate::Error::Validation("username required".into()));
    }
    if password.is_empty() {
        return Err(crate::Error::Validation("password required".into()));
    }
    Ok(())
}
