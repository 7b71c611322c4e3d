//! StarStation Core - Domain model and game rules
//!
//! This crate provides the pure domain logic of the colony game:
//! - Resource kinds, per-user game state, owned buildings
//! - Catalog definitions for buildings and world events
//! - The accrual engine (preview and harvest-commit paths)
//! - The build operation and the rarity-weighted event selector
//! - Deterministic RNG and an explicit millisecond clock
//!
//! No I/O happens here; persistence and catalog loading live in the
//! `starstation-db` and `starstation-script` crates.

pub mod accrual;
mod build;
pub mod catalog;
mod error;
mod events;
mod identity;
mod resources;
mod rng;
mod state;
pub mod time;

pub use accrual::{compute_accrual, harvest, HarvestOutcome};
pub use build::build;
pub use catalog::{BuildingCatalog, BuildingDef, EventCatalog, EventDef, EventEffects, Rarity};
pub use error::{Error, Result};
pub use events::{trigger_event, TriggerOutcome};
pub use identity::{DefId, UserId};
pub use resources::{zero_filled, ModifierMap, Resource, ResourceMap};
pub use rng::GameRng;
pub use state::{
    ActiveEvent, Building, GameState, Position, STARTER_BALANCES, STARTER_BUILDING,
};
pub use time::{Clock, ManualClock, TimestampMs, MS_PER_MINUTE};
